use anyhow::{bail, Context};
use text_helpers::payload::{Outcome, ProcessorRequest};
use text_helpers::{format_output, validate_input, Configuration, DataProcessor, LocalProcessorFactory};
use tracing_subscriber::EnvFilter;

/// Demo showing the helpers on their own, then chained as byte-payload processors
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Text Helpers Demo ===\n");

    let inputs = ["hello", "", "no-marker", "user@example.com"];
    for input in inputs {
        println!(
            "{:<20} valid={:<5} formatted='{}'",
            format!("'{}'", input),
            validate_input(input),
            format_output(input)
        );
    }

    let configuration = Configuration::from_yaml_str("k: 1\nlabel: demo")
        .context("demo settings should parse")?;
    let processor = DataProcessor::new(configuration);
    println!("\nDataProcessor with {} settings: 'MiXeD' -> '{}'", processor.configuration().len(), processor.process("MiXeD"));

    println!("\n--- Pipeline: input_validator -> output_formatter -> data_processor ---");
    let mut request = ProcessorRequest::from_text("user@example.com");
    for name in ["input_validator", "output_formatter", "data_processor"] {
        let stage = LocalProcessorFactory::create_processor(name, Configuration::new())?;
        let response = stage.process(request);

        let payload = match response.outcome {
            Some(Outcome::NextPayload(payload)) => payload,
            Some(Outcome::Error(err)) => bail!("{} failed ({}): {}", name, err.code, err.message),
            None => bail!("No outcome from {}", name),
        };

        println!("After {}: '{}' {:?}", name, String::from_utf8_lossy(&payload), response.metadata);
        request = ProcessorRequest {
            payload,
            metadata: response.metadata,
        };
    }

    println!("\n--- Invalid UTF-8 is rejected at the boundary ---");
    let formatter = LocalProcessorFactory::create_processor("output_formatter", Configuration::new())?;
    let response = formatter.process(ProcessorRequest {
        payload: vec![0xff, 0xfe],
        ..Default::default()
    });
    if let Some(err) = response.error() {
        println!("Error {}: {}", err.code, err.message);
    }

    Ok(())
}

// Simple pipeline example
// Author: Gabriel Demetrios Lafis

use rust_pipe_combinators::{
    processing::{drop, filter, fold, iota, map, reverse, take, Pipeline, PipelineDefinition},
    PipelineValue,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let v: Vec<i64> = vec![1, 2, 3, 4, 5];
    println!("Input: {}", PipelineValue::Sequence(v.clone()));

    // Chain stages with the pipe operator
    let sum = v.clone()
        | filter(|e: &i64| e % 2 != 0)
        | map(|e: i64| e + 1)
        | fold(0, |acc: i64, e: i64| acc + e);
    println!("Sum of incremented evens: {}", sum.clone()?);

    let window = sum | iota() | reverse() | drop(4) | take(2);
    println!("Window: {}", PipelineValue::Sequence(window.clone()?));

    let product = window | fold(1, |acc: i64, e: i64| acc * e);
    println!("Product: {}", product?);

    // The same chain as a dynamic pipeline
    let pipeline = Pipeline::new("example")
        .add(filter(|e: &i64| e % 2 != 0))
        .add(map(|e: i64| e + 1))
        .add(fold(0, |acc: i64, e: i64| acc + e))
        .add(iota())
        .add(reverse());
    println!("Stages: {}", pipeline.stage_names().join(" | "));
    println!("Dynamic result: {}", pipeline.execute(v)?);

    // Failures name the stage that rejected its input
    let definition: PipelineDefinition = serde_json::from_str(
        r#"{"name": "too-far", "input": [1, 2, 3], "stages": ["reverse", {"drop": 7}]}"#,
    )?;
    if let Err(err) = definition.run() {
        println!("Expected failure: {}", err);
        if let Some(cause) = std::error::Error::source(&err) {
            println!("  caused by: {}", cause);
        }
    }

    Ok(())
}

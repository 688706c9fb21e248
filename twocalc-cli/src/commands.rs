//! CLI command implementations.

use std::fs;

use log::info;
use twocalc_codec::{
    decode as decode_tokens, encode_with_layout, from_bytes, from_bytes_lossy, render, to_bytes,
    Mode,
};
use twocalc_common::{Expr, Program};

use crate::config::{CodecConfig, GenerateConfig, Options, DEFAULT_DEPTH};

/// Generate an expression from a seed and compare both evaluators.
pub fn generate(args: &[String]) -> Result<(), i32> {
    let opts = Options::new(args);
    let config = GenerateConfig::from_options(&opts, DEFAULT_DEPTH)?;

    let expr = twocalc_generator::from_seed(config.seed, config.depth);
    info!("seed {} depth {} -> {expr}", config.seed, config.depth);
    let program = expr.compile();

    if let Some(output) = opts.value("-o") {
        let bytes = program.encode();
        write_file(output, &bytes)?;
        eprintln!("wrote {} tokens -> {output}", program.len());
    }

    report(&expr, &program)
}

/// Run a bytecode program.
pub fn run(args: &[String]) -> Result<(), i32> {
    let opts = Options::new(args);
    let Some(input) = opts.input() else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: twocalc run <prog.tcb> [--decompile]");
        return Err(1);
    };

    let program = read_program(input)?;

    if let Err(e) = twocalc_vm::check_stack(&program) {
        eprintln!("error: {e}");
        return Err(3);
    }

    let value = twocalc_vm::run(&program).map_err(|e| {
        eprintln!("runtime error: {e}");
        3
    })?;

    if opts.has("--decompile") {
        let expr = twocalc_vm::decompile(&program).map_err(|e| {
            eprintln!("error: {e}");
            3
        })?;
        println!("expr: {expr}");
        println!("eval: {}", expr.eval());
    }

    println!("{value}");
    Ok(())
}

/// Print a bytecode program in its textual rendering.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    let opts = Options::new(args);
    let Some(input) = opts.input() else {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: twocalc disassemble <prog.tcb>");
        return Err(1);
    };

    let program = read_program(input)?;
    println!("{program}");
    Ok(())
}

/// Encode a generated expression into a flat token buffer.
pub fn encode(args: &[String]) -> Result<(), i32> {
    let opts = Options::new(args);
    let Some(output) = opts.value("-o") else {
        eprintln!("error: encode requires an output file");
        eprintln!("Usage: twocalc encode --seed N [--depth D] [--max-depth M] [--legacy] -o out.tcf");
        return Err(1);
    };

    let codec = CodecConfig::from_options(&opts)?;
    let config = GenerateConfig::from_options(&opts, codec.max_depth)?;

    let expr = twocalc_generator::from_seed(config.seed, config.depth);
    let tokens = encode_with_layout(&expr, codec.max_depth, 0, codec.layout).map_err(|e| {
        eprintln!("error: {e}");
        2
    })?;

    println!("expr: {expr}");
    println!("tokens: {}", render(&tokens));

    write_file(output, &to_bytes(&tokens))?;
    eprintln!("wrote {} tokens -> {output}", tokens.len());
    Ok(())
}

/// Decode a flat token buffer and compare both evaluators.
///
/// With `--resilient` any byte buffer is accepted: unknown kind bytes
/// wrap around and an odd trailing byte is dropped.
pub fn decode(args: &[String]) -> Result<(), i32> {
    let opts = Options::new(args);
    let Some(input) = opts.input() else {
        eprintln!("error: decode requires an input file");
        eprintln!("Usage: twocalc decode <in.tcf> [--max-depth M] [--resilient]");
        return Err(1);
    };

    let codec = CodecConfig::from_options(&opts)?;
    let bytes = read_file(input)?;
    let tokens = match codec.mode {
        Mode::Strict => from_bytes(&bytes).map_err(|e| {
            eprintln!("error: {e}");
            1
        })?,
        Mode::Resilient => from_bytes_lossy(&bytes),
    };
    info!("decoding {} tokens: {}", tokens.len(), render(&tokens));

    let expr = decode_tokens(&tokens, codec.max_depth, codec.mode).map_err(|e| {
        eprintln!("error: {e}");
        2
    })?;

    report(&expr, &expr.compile())
}

/// Print an expression, its bytecode and both results.
///
/// Fails with exit code 4 when the two results differ.
fn report(expr: &Expr, program: &Program) -> Result<(), i32> {
    let from_expr = expr.eval();
    let from_vm = twocalc_vm::run(program).map_err(|e| {
        eprintln!("runtime error: {e}");
        3
    })?;

    println!("expr: {expr}");
    println!("bytecode: {program}");
    println!("eval: {from_expr}");
    println!("run: {from_vm}");

    if from_expr != from_vm {
        eprintln!(
            "divergence: eval = {from_expr}, run = {from_vm}, delta = {}",
            (from_expr - from_vm).abs()
        );
        return Err(4);
    }
    Ok(())
}

fn read_program(path: &str) -> Result<Program, i32> {
    let bytes = read_file(path)?;
    Program::decode(&bytes).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn read_file(path: &str) -> Result<Vec<u8>, i32> {
    fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })
}

fn write_file(path: &str, bytes: &[u8]) -> Result<(), i32> {
    fs::write(path, bytes).map_err(|e| {
        eprintln!("error: cannot write '{path}': {e}");
        1
    })
}

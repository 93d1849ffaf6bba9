use std::env;
use std::io;
use std::process;

use anyhow::{bail, Context};
use bytes::{BufMut, Bytes, BytesMut};
use regex_fsm::Automaton;

const DEMO_PATTERN: &str = "a*4.+hi";
const DEMO_INPUTS: [&str; 3] = ["aaaaaa4uhi", "4uhi", "meow"];

// Builds the demo pattern and prints one decision per sample input.
fn demo() -> anyhow::Result<()> {
    let re = Automaton::new(DEMO_PATTERN)
        .with_context(|| format!("failed to build pattern {:?}", DEMO_PATTERN))?;
    for input in DEMO_INPUTS {
        println!("{}", re.is_match(input));
    }
    Ok(())
}

// Reads all of stdin into a single buffer.
fn read_stdin() -> anyhow::Result<Bytes> {
    let mut writer = BytesMut::new().writer();
    io::copy(&mut io::stdin().lock(), &mut writer).context("failed to read stdin")?;
    Ok(writer.into_inner().freeze())
}

// True if any line of `input` is matched in full.
fn any_line_matches(re: &Automaton, input: &Bytes) -> anyhow::Result<bool> {
    let input: &[u8] = input;
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    for (n, line) in input.split(|&b| b == b'\n').enumerate() {
        let line = std::str::from_utf8(line)
            .with_context(|| format!("line {} is not valid UTF-8", n + 1))?;
        // Tolerate CRLF input.
        let line = line.strip_suffix('\r').unwrap_or(line);
        if re.is_match(line) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn run() -> anyhow::Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            demo()?;
            Ok(true)
        }
        [flag, pattern] if flag == "-E" => {
            let re = Automaton::new(pattern)
                .with_context(|| format!("failed to build pattern {:?}", pattern))?;
            let input = read_stdin()?;
            any_line_matches(&re, &input)
        }
        _ => bail!("usage: regex-fsm [-E <pattern>]"),
    }
}

// Usage: echo <input_text> | regex-fsm -E <pattern>
//        regex-fsm               (runs the built-in demo)
fn main() {
    match run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}

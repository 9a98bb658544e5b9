//! Command implementations for the typekey CLI.

use std::io::BufRead;

use typekey_demangle::{Demangler, ItaniumDemangler, canonical_type_name};

/// Demangle and canonicalize each symbol.
pub fn canon(args: &[String]) -> i32 {
    run(args, |symbol| {
        canonical_type_name(symbol).map_err(|err| err.to_string())
    })
}

/// Print the raw demangled form, without canonicalization.
pub fn demangle(args: &[String]) -> i32 {
    run(args, |symbol| {
        ItaniumDemangler
            .demangle(symbol)
            .map_err(|err| err.to_string())
    })
}

fn run<F>(args: &[String], resolve: F) -> i32
where
    F: FnMut(&str) -> Result<String, String>,
{
    match collect_symbols(args) {
        Ok(symbols) => report(&symbols, resolve),
        Err(err) => {
            eprintln!("typekey: reading symbols from stdin: {err}");
            1
        }
    }
}

/// Symbols from the argument list, or from stdin lines when the list is
/// empty or a lone `-`. A read error is an error, not end-of-input: a
/// truncated batch must not look like a successful run.
fn collect_symbols(args: &[String]) -> std::io::Result<Vec<String>> {
    if args.is_empty() || (args.len() == 1 && args[0] == "-") {
        read_symbols(std::io::stdin().lock())
    } else {
        Ok(args.to_vec())
    }
}

fn read_symbols<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut symbols = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let symbol = line.trim();
        if !symbol.is_empty() {
            symbols.push(symbol.to_string());
        }
    }
    Ok(symbols)
}

/// Resolve every symbol, printing names on stdout and failures on stderr.
/// Exit status is 0 only when every symbol resolved.
fn report<F>(symbols: &[String], mut resolve: F) -> i32
where
    F: FnMut(&str) -> Result<String, String>,
{
    let mut failed = false;
    for symbol in symbols {
        match resolve(symbol) {
            Ok(name) => println!("{name}"),
            Err(err) => {
                eprintln!("typekey: {err}");
                failed = true;
            }
        }
    }
    if failed { 1 } else { 0 }
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "typekey", bin_name = "typekey")]
#[command(about = "Canonical C++ type names for dictionary lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Demangle symbols and canonicalize them into dictionary keys
    #[command(after_help = r#"EXAMPLES:
  typekey canon _ZTSSt6vectorIiSaIiEE
  nm my_plugin.so | awk '{print $3}' | typekey canon -"#)]
    Canon {
        /// Mangled symbols; read one per line from stdin when empty or "-"
        #[arg(value_name = "SYMBOL")]
        symbols: Vec<String>,
    },

    /// Demangle symbols without canonicalization
    Demangle {
        /// Mangled symbols; read one per line from stdin when empty or "-"
        #[arg(value_name = "SYMBOL")]
        symbols: Vec<String>,
    },
}

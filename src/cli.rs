use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{check, serve};

#[derive(Parser)]
#[command(name = "crudecast")]
#[command(about = "Crude oil price forecast dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Path to the historical price CSV
        ///
        /// The file must carry the source's original headers; the loader
        /// renames them to the canonical date/price columns.
        #[arg(short, long, env = "DATA_FILE", default_value = "data/crude_oil_wti.csv")]
        data_file: String,

        /// Path to the pretrained model artifact (JSON)
        #[arg(short, long, env = "MODEL_FILE", default_value = "model.json")]
        model_file: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Validate the data file and the model artifact without serving
    ///
    /// Loads both inputs exactly the way `serve` does, reports what was
    /// found, and exits nonzero on the first failure.
    Check {
        /// Path to the historical price CSV
        #[arg(short, long, env = "DATA_FILE", default_value = "data/crude_oil_wti.csv")]
        data_file: String,

        /// Path to the pretrained model artifact (JSON)
        #[arg(short, long, env = "MODEL_FILE", default_value = "model.json")]
        model_file: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                data_file,
                model_file,
                bind_address,
            } => {
                serve(&data_file, &model_file, &bind_address).await?;
            }
            Commands::Check {
                data_file,
                model_file,
            } => {
                check(&data_file, &model_file)?;
            }
        }
        Ok(())
    }
}

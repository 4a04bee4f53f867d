use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::Path;
use vlsm_subnet_planner::config::{init_logging, Settings};
use vlsm_subnet_planner::output::{
    plan_rows, render_export, render_network_info, render_plan, render_subnets, save_export,
    ExportFormat,
};
use vlsm_subnet_planner::{parse_host_cidr, run_plan, run_subdivide};

#[derive(Parser)]
#[command(name = "vlsm")]
#[command(about = "IPv4 subnet calculator and VLSM planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the properties of a network, e.g. 192.168.10.42/24
    Info {
        cidr: String,
        /// Treat /31 as a point-to-point link (RFC 3021)
        #[arg(long)]
        p2p: bool,
    },
    /// Split a network into equal subnets (count rounds up to a power of two)
    Subdivide {
        cidr: String,
        count: u32,
        #[arg(long)]
        p2p: bool,
    },
    /// Allocate subnets for a list like "web:50, db:20, /30"
    Plan {
        cidr: String,
        requirements: String,
        /// Treat a 2 host request as a /31 point-to-point link
        #[arg(long)]
        p2p: bool,
        /// Do not add network and broadcast addresses to host counts
        #[arg(long)]
        no_reserve: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Also export the free blocks
        #[arg(long)]
        include_free: bool,
        /// Write the csv/json export to vlsm_plan_<date> in the current directory
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    init_logging(&settings.log_config)?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    match cli.command {
        Commands::Info { cidr, p2p } => {
            let (host, network) = parse_host_cidr(&cidr)?;
            print!(
                "{}",
                render_network_info(host, &network, p2p || settings.allow_p2p)
            );
        }
        Commands::Subdivide { cidr, count, p2p } => {
            let subnets = run_subdivide(&cidr, count)?;
            print!("{}", render_subnets(&subnets, p2p || settings.allow_p2p));
        }
        Commands::Plan {
            cidr,
            requirements,
            p2p,
            no_reserve,
            format,
            include_free,
            save,
        } => {
            let mut options = settings.plan_options();
            options.allow_p2p |= p2p;
            if no_reserve {
                options.reserve_network_broadcast = false;
            }

            let (base, result) = run_plan(&cidr, &requirements, &options)?;
            let rows = plan_rows(&result, options.allow_p2p, include_free);
            let export = match format {
                OutputFormat::Table => None,
                OutputFormat::Csv => Some(ExportFormat::Csv),
                OutputFormat::Json => Some(ExportFormat::Json),
            };

            match export {
                Some(export) => print!("{}", render_export(&rows, export)?),
                None => print!("{}", render_plan(&base, &result, &options)),
            }

            if save {
                let path = save_export(
                    &rows,
                    export.unwrap_or(ExportFormat::Csv),
                    Path::new("."),
                )?;
                eprintln!("Saved {} rows to {}", rows.len(), path.display());
            }

            if let Some(requirement) = result.failed_requirement() {
                return Err(format!("Plan failed: no room for requirement {requirement}").into());
            }
        }
    }

    log::info!("#End main()");
    Ok(())
}

//! sui-pure-args: resolve Move call arguments from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Parse a type expression into normalized-type JSON
//! sui-pure-args parse 'vector<0x1::option::Option<u64>>' --json
//!
//! # Resolve one argument against a type expression
//! sui-pure-args resolve --type-expr 'vector<bool>' --value '["1","0"]'
//!
//! # Resolve a generic parameter through the call's type arguments
//! sui-pure-args resolve --type '{"TypeParameter":0}' --type-arg u64 --value 5
//!
//! # Resolve all arguments of a call against its normalized parameters
//! sui-pure-args call --params '["U64","Bool"]' --args '[7,"true"]'
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use sui_pure_args::{
    parse_raw_value, parse_type_argument_list, parse_type_expression, resolve_call_arguments,
    NormalizedType, PureArg, PureArgResolver, ResolverConfig,
};

#[derive(Parser)]
#[command(
    name = "sui-pure-args",
    author,
    version,
    about = "Resolve loosely-typed Move call arguments into Sui pure arguments"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Print diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Move type expression
    Parse(ParseCmd),

    /// Resolve a single argument against a parameter type
    Resolve(ResolveCmd),

    /// Resolve every argument of a call against its parameter list
    Call(CallCmd),
}

#[derive(Args)]
struct ParseCmd {
    /// Type expression, e.g. `vector<u8>` or `0x2::coin::Coin<0x2::sui::SUI>`
    expr: String,

    /// Treat the input as a comma-separated type argument list
    #[arg(long)]
    list: bool,
}

impl ParseCmd {
    fn execute(&self, json: bool) -> Result<()> {
        let types = if self.list {
            parse_type_argument_list(&self.expr)?
        } else {
            vec![parse_type_expression(&self.expr)?]
        };

        if json {
            let out = if self.list {
                serde_json::to_string_pretty(&types)?
            } else {
                serde_json::to_string_pretty(&types[0])?
            };
            println!("{}", out);
        } else {
            for ty in &types {
                println!("{}", ty);
            }
        }
        Ok(())
    }
}

#[derive(Args)]
struct ResolveCmd {
    /// Parameter type as normalized-type JSON, e.g. '{"Vector":"U8"}'
    #[arg(long = "type", value_name = "JSON", conflicts_with = "type_expr")]
    type_json: Option<String>,

    /// Parameter type as a Move type expression, e.g. 'vector<u8>'
    #[arg(long, value_name = "EXPR")]
    type_expr: Option<String>,

    /// Raw argument value: JSON, or any other text as a plain string.
    /// Omit for an absent value.
    #[arg(long, allow_hyphen_values = true)]
    value: Option<String>,

    /// Type argument of the call (repeat in order)
    #[arg(long = "type-arg", value_name = "TYPE")]
    type_args: Vec<String>,

    /// Maximum nesting depth (default: $SUI_PURE_ARGS_MAX_DEPTH, else unbounded)
    #[arg(long)]
    max_depth: Option<usize>,
}

impl ResolveCmd {
    fn execute(&self, json: bool, verbose: bool) -> Result<()> {
        let ty = match (&self.type_json, &self.type_expr) {
            (Some(text), _) => normalized_type_from_json(text)?,
            (None, Some(expr)) => parse_type_expression(expr)?,
            (None, None) => bail!("one of --type or --type-expr is required"),
        };
        let raw = self.value.as_deref().map(parse_raw_value);
        let config = resolver_config(self.max_depth);

        if verbose {
            eprintln!("Resolving {} (raw: {:?}, config: {:?})", ty, raw, config);
        }

        let resolver = PureArgResolver::with_config(self.type_args.as_slice(), config);
        let arg = resolver
            .resolve(&ty, raw)
            .with_context(|| format!("failed to resolve argument of type {}", ty))?;

        print_pure_arg(&arg, json)
    }
}

#[derive(Args)]
struct CallCmd {
    /// Function parameters as a JSON array of normalized types
    #[arg(long, value_name = "JSON")]
    params: String,

    /// Raw arguments as a JSON array
    #[arg(long, value_name = "JSON", default_value = "[]")]
    args: String,

    /// Type argument of the call (repeat in order)
    #[arg(long = "type-arg", value_name = "TYPE")]
    type_args: Vec<String>,

    /// Maximum nesting depth (default: $SUI_PURE_ARGS_MAX_DEPTH, else unbounded)
    #[arg(long)]
    max_depth: Option<usize>,
}

impl CallCmd {
    fn execute(&self, json: bool, verbose: bool) -> Result<()> {
        let params: Vec<NormalizedType> = serde_json::from_str(&self.params)
            .context("--params must be a JSON array of normalized types")?;
        let raw_args: Vec<Value> =
            serde_json::from_str(&self.args).context("--args must be a JSON array")?;

        if verbose {
            eprintln!(
                "Resolving {} argument(s) against {} parameter(s)",
                raw_args.len(),
                params.len()
            );
        }

        let call = resolve_call_arguments(
            &params,
            raw_args,
            self.type_args.as_slice(),
            resolver_config(self.max_depth),
        )?;

        if json {
            println!("{}", serde_json::to_string_pretty(&call.to_json())?);
        } else {
            for (index, outcome) in call.arguments.iter().enumerate() {
                match outcome {
                    Ok(arg) => println!("#{}: {}", index, describe(arg)),
                    Err(err) => println!("#{}: error: {}", index, err),
                }
            }
        }

        let failed = call.errors().count();
        if failed > 0 {
            bail!("{} argument(s) failed to resolve", failed);
        }
        Ok(())
    }
}

fn normalized_type_from_json(text: &str) -> Result<NormalizedType> {
    let value: Value = serde_json::from_str(text).context("--type must be valid JSON")?;
    Ok(NormalizedType::from_json(&value)?)
}

fn resolver_config(max_depth: Option<usize>) -> ResolverConfig {
    max_depth
        .map(ResolverConfig::with_max_depth)
        .unwrap_or_else(ResolverConfig::from_env)
}

fn describe(arg: &PureArg) -> String {
    let value = arg
        .value
        .as_ref()
        .map(Value::to_string)
        .unwrap_or_else(|| "<none>".to_string());
    match &arg.serialization_type {
        Some(ty) => format!("{} {}", ty, value),
        None => format!("unresolved (supply pre-encoded bytes) {}", value),
    }
}

fn print_pure_arg(arg: &PureArg, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(arg)?);
    } else {
        println!("{}", describe(arg));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse(cmd) => cmd.execute(cli.json),
        Commands::Resolve(cmd) => cmd.execute(cli.json, cli.verbose),
        Commands::Call(cmd) => cmd.execute(cli.json, cli.verbose),
    }
}

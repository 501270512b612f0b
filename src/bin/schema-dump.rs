//! # Provider Schema Dump
//!
//! Prints the provider block schema and every resource schema as JSON, in
//! the shape a host engine loads during provider discovery.
//!
//! ## Usage
//!
//! ```bash
//! # All schemas
//! cargo run --bin schema-dump
//!
//! # A single resource type
//! cargo run --bin schema-dump onelogin_oidc_apps
//! ```
//!
//! ## Output Example
//!
//! ```text
//! {
//!   "provider": { "name": "onelogin", ... },
//!   "resources": {
//!     "onelogin_oidc_apps": { "name": "onelogin_oidc_apps", "fields": [...] }
//!   }
//! }
//! ```

use onelogin_provider::ProviderConfig;
use onelogin_provider::resource::resource_schemas;
use serde_json::{Map, Value, json};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let output = match args.get(1) {
        Some(type_name) => match resource_schemas()
            .into_iter()
            .find(|(name, _)| *name == type_name.as_str())
        {
            Some((_, schema)) => to_json(&schema),
            None => {
                eprintln!("❌ Unknown resource type: {}", type_name);
                eprintln!();
                eprintln!("Available resource types:");
                for (name, _) in resource_schemas() {
                    eprintln!("  - {}", name);
                }
                process::exit(1);
            }
        },
        None => {
            let resources: Map<String, Value> = resource_schemas()
                .into_iter()
                .map(|(name, schema)| (name.to_string(), to_json(&schema)))
                .collect();
            json!({
                "provider": to_json(&ProviderConfig::schema()),
                "resources": resources,
            })
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ Failed to serialize schemas: {}", e);
            process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        eprintln!("❌ Failed to serialize schema: {}", e);
        process::exit(1);
    })
}

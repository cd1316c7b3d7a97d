use std::path::Path;

use ah_dice::{EntropyFactory, SeededFactory};
use ah_interactions::config::PUBLIC_KEY_VAR;
use ah_interactions::{
    InteractionConfig, InteractionHandler, InteractionRequest, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};

pub fn run(
    body: &Path,
    signature: &str,
    timestamp: &str,
    public_key: Option<&str>,
    seed: Option<u64>,
) -> Result<(), String> {
    let body = read_body(body)?;
    let config = match public_key {
        Some(key) => InteractionConfig::from_lookup(|name| {
            if name == PUBLIC_KEY_VAR {
                Some(key.to_string())
            } else {
                std::env::var(name).ok()
            }
        }),
        None => InteractionConfig::from_env(),
    }
    .map_err(|e| e.to_string())?;

    let request = InteractionRequest::new(body)
        .with_header(SIGNATURE_HEADER, signature)
        .with_header(TIMESTAMP_HEADER, timestamp);

    let response = match seed {
        Some(seed) => InteractionHandler::from_config(&config, SeededFactory::new(seed))
            .map_err(|e| e.to_string())?
            .handle(&request),
        None => InteractionHandler::from_config(&config, EntropyFactory)
            .map_err(|e| e.to_string())?
            .handle(&request),
    };

    println!("status: {}", response.status);
    println!("{}", response.body);

    if response.is_success() {
        Ok(())
    } else {
        Err(format!("request rejected with status {}", response.status))
    }
}

fn read_body(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).map_err(|e| format!("cannot read stdin: {e}"))
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
    }
}

// Looks up google.com's A records, dig style but with no flags.
//
// Set RUST_LOG=debug to see the query and reply on the wire.
mod util;

use log::debug;
use netdns::clients::udp::{DEFAULT_PORT, GOOGLE_IPV4_PRIMARY};
use netdns::clients::{AsyncExchanger, UdpClient};
use netdns::{Query, Rcode, Response, Type};
use std::process;

const DOMAIN: &str = "google.com";

/// One line per answer, giving its address (or nil) and owner name.
fn format_answers(response: &Response) -> String {
    response
        .answers
        .iter()
        .map(|record| {
            let ip = match record.ipv4() {
                Some(ip) => ip.to_string(),
                None => "nil".to_string(),
            };
            format!("IPv4: {}, {}\n", ip, record.name)
        })
        .collect()
}

/// The process exit status for a response, its numeric rcode.
fn exit_code(rcode: Rcode) -> i32 {
    i32::from(u8::from(rcode))
}

async fn resolve(query: &Query) -> netdns::Result<Response> {
    if log::log_enabled!(log::Level::Debug) {
        debug!("query:\n{}", util::hexdump(&query.to_vec()?));
    }

    let client = UdpClient::new(GOOGLE_IPV4_PRIMARY, DEFAULT_PORT)?;
    let response = client.exchange(query).await?;

    debug!("response:\n{}", response);
    Ok(response)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let query = Query::question(&mut rand::thread_rng(), DOMAIN, Type::A);

    let response = match resolve(&query).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("failed to resolve {}: {}", DOMAIN, e);
            process::exit(1);
        }
    };

    print!("{}", format_answers(&response));

    let rcode = response.header.flags.rcode();
    if rcode != Rcode::Success {
        eprintln!("{}", response);
        eprintln!("{}: {}", rcode, rcode.description());
    }

    process::exit(exit_code(rcode));
}

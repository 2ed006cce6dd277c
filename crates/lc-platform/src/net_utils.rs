use local_ip_address::list_afinet_netifas;
use std::net::{IpAddr, Ipv4Addr};
use tracing::warn;

/// Port used when a listen address does not name one.
pub const DEFAULT_PORT: &str = "8080";

/// List IPv4 addresses other devices on the LAN can reach this host at.
///
/// Loopback and link-local (169.254.*) addresses are skipped.
pub fn lan_ipv4_addrs() -> Vec<Ipv4Addr> {
    let interfaces = match list_afinet_netifas() {
        Ok(ifaces) => ifaces,
        Err(e) => {
            warn!(error = %e, "failed to enumerate network interfaces");
            return Vec::new();
        }
    };

    let mut addrs: Vec<Ipv4Addr> = interfaces
        .into_iter()
        .filter_map(|(_, ip)| match ip {
            IpAddr::V4(v4) if is_reachable_ipv4(v4) => Some(v4),
            _ => None,
        })
        .collect();
    addrs.sort();
    addrs.dedup();
    addrs
}

fn is_reachable_ipv4(ip: Ipv4Addr) -> bool {
    !ip.is_loopback() && !ip.is_link_local() && !ip.is_unspecified()
}

/// Extract the port from a listen address like `:8080` or `0.0.0.0:8080`.
pub fn port_from_addr(addr: &str) -> &str {
    if addr.is_empty() {
        return DEFAULT_PORT;
    }
    match addr.rfind(':') {
        Some(idx) if idx + 1 < addr.len() => &addr[idx + 1..],
        Some(_) => DEFAULT_PORT,
        None => addr,
    }
}

/// `http://<ip>:<port>` for every LAN address of this host.
pub fn server_urls(port: &str) -> Vec<String> {
    let port = if port.is_empty() { DEFAULT_PORT } else { port };
    lan_ipv4_addrs()
        .into_iter()
        .map(|ip| format!("http://{ip}:{port}"))
        .collect()
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use st_fixtures::bgp::{
    create_bgp_peer, delete_bgp_peer, get_bgp_peers, PeerRecord, Scope,
};
use st_fixtures::Host;
use std::io::{stdout, Write};
use tabwriter::TabWriter;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a BGP peer through the management tool.
    CreatePeer(Peer),

    /// Delete a BGP peer through the management tool.
    DeletePeer(Peer),

    /// List the BGP peers known to the management tool.
    GetPeers,

    /// Print the resource file for a peer without touching any host.
    Render(Render),
}

#[derive(Args, Debug)]
pub struct Peer {
    /// Peer scope, `node` or `global`
    pub scope: String,

    /// Peer address
    pub ip: String,

    /// Autonomous system number of the peer
    #[arg(allow_negative_numbers = true)]
    pub asn: i64,
}

#[derive(Args, Debug)]
pub struct Render {
    pub scope: Scope,

    /// Owning node, empty for global peers
    pub node: String,

    pub ip: String,

    #[arg(allow_negative_numbers = true)]
    pub asn: i64,
}

pub fn commands(command: Commands, host: &dyn Host) -> Result<()> {
    match command {
        Commands::CreatePeer(p) => create_bgp_peer(host, &p.scope, &p.ip, p.asn)
            .with_context(|| format!("create peer {}", p.ip))?,
        Commands::DeletePeer(p) => delete_bgp_peer(host, &p.scope, &p.ip, p.asn)
            .with_context(|| format!("delete peer {}", p.ip))?,
        Commands::GetPeers => get_peers(host)?,
        Commands::Render(r) => render(r)?,
    }
    Ok(())
}

fn get_peers(host: &dyn Host) -> Result<()> {
    let peers = get_bgp_peers(host).context("get peers")?;
    let mut tw = TabWriter::new(stdout());
    writeln!(
        &mut tw,
        "{}\t{}\t{}\t{}",
        "Scope".dimmed(),
        "Node".dimmed(),
        "Peer IP".dimmed(),
        "ASN".dimmed(),
    )?;
    for p in &peers {
        let node = match p.metadata.node.as_str() {
            "" => "-",
            node => node,
        };
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}",
            p.metadata.scope, node, p.metadata.peer_ip, p.spec.as_number,
        )?;
    }
    tw.flush()?;
    Ok(())
}

fn render(r: Render) -> Result<()> {
    let record = PeerRecord::new(r.scope, &r.node, &r.ip, r.asn)?;
    print!("{}", record.to_yaml()?);
    Ok(())
}

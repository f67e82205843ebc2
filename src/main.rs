// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Larissa CLI entrypoint.
//!
//! The binary stands in for a presentation layer: it lists the sample
//! gallery, dumps a sample as JSON, or activates a node payload the way a
//! click on an interactive node would.

use std::error::Error;

use larissa::model::{Graph, NodeId, Payload};
use larissa::samples::sample_graphs;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n  {program} list\n  {program} show <graph-name>\n  {program} open <graph-name> <node-id>\n\nWith no arguments (or `list`), prints the sample graph names in gallery order.\n`show` prints the named sample graph as JSON.\n`open` activates the node's payload: a family member opens its biography URL\nwith the host's default handler; an interactive marker prints its node id."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Show { graph: String },
    Open { graph: String, node: String },
}

fn parse_command(mut args: impl Iterator<Item = String>) -> Result<Command, ()> {
    let Some(first) = args.next() else {
        return Ok(Command::List);
    };

    let command = match first.as_str() {
        "list" => Command::List,
        "show" => Command::Show {
            graph: args.next().ok_or(())?,
        },
        "open" => Command::Open {
            graph: args.next().ok_or(())?,
            node: args.next().ok_or(())?,
        },
        _ => return Err(()),
    };

    if args.next().is_some() {
        return Err(());
    }
    Ok(command)
}

fn find_graph(name: &str) -> Result<Graph, String> {
    sample_graphs()
        .into_iter()
        .find(|graph| graph.name() == name)
        .ok_or_else(|| format!("unknown sample graph: {name}"))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "larissa".to_owned());

        let command = match parse_command(args) {
            Ok(command) => command,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        match command {
            Command::List => {
                for graph in sample_graphs() {
                    println!("{}", graph.name());
                }
            }
            Command::Show { graph } => {
                let graph = find_graph(&graph)?;
                println!("{}", serde_json::to_string_pretty(&graph)?);
            }
            Command::Open { graph, node } => {
                let graph = find_graph(&graph)?;
                let node_id = NodeId::new(node)?;
                let node = graph
                    .node(&node_id)
                    .ok_or_else(|| format!("no node {node_id} in {}", graph.name()))?;
                match node.payload() {
                    Some(Payload::FamilyMember(member)) => member.open_biography(),
                    Some(Payload::Interactive { node_id }) => println!("{node_id}"),
                    None => {
                        return Err(format!("node {node_id} carries no payload").into());
                    }
                }
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use sap_graph::boundary;
use sap_graph::graph::Graph;
use sap_graph::{Digraph, Sap};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = match args.get(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: {} <digraph-file>", args.first().map(String::as_str).unwrap_or("sap"));
            process::exit(2);
        }
    };

    if let Err(err) = run(path) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let graph = Digraph::from_reader(BufReader::new(File::open(path)?))?;
    log::info!(
        "Loaded {} with {} vertices and {} edges",
        path,
        graph.vertex_count(),
        graph.edge_count()
    );
    let n = graph.vertex_count();
    let sap = Sap::from_digraph(graph);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let ids: Result<Vec<i64>, _> = tokens.iter().map(|t| t.parse::<i64>()).collect();
        let (v, w) = match ids.as_deref() {
            Ok([v, w]) => (*v, *w),
            _ => {
                eprintln!("expected two vertex IDs, got {:?}", line);
                continue;
            }
        };

        let result = boundary::vertex(v, n)
            .and_then(|v| Ok((v, boundary::vertex(w, n)?)))
            .and_then(|(v, w)| sap.query(v, w));

        match result {
            Ok(found) => {
                let length = boundary::to_sentinel(found.as_ref().map(|p| p.length));
                let ancestor = boundary::to_sentinel(found.as_ref().map(|p| p.ancestor));
                writeln!(out, "length = {}, ancestor = {}", length, ancestor)?;
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}

//! Frontend: convert a textual routine description to IR.
//!
//! The format is one stanza per block, entry block first:
//!
//! ```plain
//! # comment
//! block entry:
//!   write x
//!   succs loop
//! block loop:
//!   read x
//!   other
//!   succs loop exit
//! block exit:
//! ```
//!
//! Variables are interned by name on first mention; successor lists
//! may refer to blocks defined later in the file.

use crate::ir::{Block, Inst, Routine, RoutineBuilder, Var};
use anyhow::{bail, Result};
use fxhash::FxHashMap;
use log::trace;

pub fn parse_routine(text: &str) -> Result<Routine> {
    let mut builder = RoutineBuilder::default();
    let mut block_names: FxHashMap<String, Block> = FxHashMap::default();
    let mut var_names: FxHashMap<String, Var> = FxHashMap::default();
    // Succ lists are resolved after all blocks are known.
    let mut pending_succs: Vec<(Block, usize, Vec<String>)> = vec![];
    let mut current: Option<Block> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let lineno = lineno + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        trace!("frontend: line {}: {:?}", lineno, line);

        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap();
        match keyword {
            "block" => {
                let name = match words.next().and_then(|w| w.strip_suffix(':')) {
                    Some(name) if !name.is_empty() => name,
                    _ => bail!("line {}: expected `block <name>:`", lineno),
                };
                if block_names.contains_key(name) {
                    bail!("line {}: duplicate block `{}`", lineno, name);
                }
                let block = builder.add_block(name);
                block_names.insert(name.to_string(), block);
                current = Some(block);
            }
            "read" | "write" => {
                let block = match current {
                    Some(block) => block,
                    None => bail!("line {}: `{}` before any block", lineno, keyword),
                };
                let var_name = match words.next() {
                    Some(name) => name,
                    None => bail!("line {}: `{}` needs a variable name", lineno, keyword),
                };
                let var = *var_names
                    .entry(var_name.to_string())
                    .or_insert_with(|| builder.add_var(Some(var_name)));
                let inst = if keyword == "read" {
                    Inst::Read(var)
                } else {
                    Inst::Write(var)
                };
                builder.push_inst(block, inst);
            }
            "other" => {
                let block = match current {
                    Some(block) => block,
                    None => bail!("line {}: `other` before any block", lineno),
                };
                builder.push_inst(block, Inst::Other);
            }
            "succs" => {
                let block = match current {
                    Some(block) => block,
                    None => bail!("line {}: `succs` before any block", lineno),
                };
                let names: Vec<String> = words.by_ref().map(|w| w.to_string()).collect();
                pending_succs.push((block, lineno, names));
            }
            _ => bail!("line {}: unknown directive `{}`", lineno, keyword),
        }
        if words.next().is_some() {
            bail!("line {}: trailing junk after `{}`", lineno, keyword);
        }
    }

    for (block, lineno, names) in pending_succs {
        for name in names {
            match block_names.get(&name) {
                Some(&succ) => builder.add_succ(block, succ),
                None => bail!("line {}: unknown successor block `{}`", lineno, name),
            }
        }
    }

    if current.is_none() {
        bail!("no blocks in input");
    }
    Ok(builder.build()?)
}

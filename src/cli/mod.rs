// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the proofweave command-line interface.
//!
//! Two subcommands: `render` turns a JSON fragment document into HTML, and
//! `inspect` renders it both ways and reports what compact mode saves.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "proofweave",
    about = "Render annotated proof scripts to foldable HTML",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render fragment groups to HTML
    Render {
        /// JSON input: {"config": {...}, "groups": [...]} or a bare array of groups
        #[arg(short, long)]
        input: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Compact mode: deduplicate subtrees and emit the resolution script
        #[arg(long)]
        minify: bool,

        /// Identifier stem, to keep several documents on one page apart
        #[arg(long)]
        stem: Option<String>,

        /// Wrap the containers in a complete HTML page
        #[arg(long)]
        standalone: bool,
    },

    /// Compare verbose and compact output for an input document
    Inspect {
        /// JSON input file
        #[arg(short, long)]
        input: String,
    },
}

//! Decoder for precomputed plain-text trajectory dumps.
//!
//! Playback mode replays trajectories produced offline instead of integrating
//! live. The text format is a repeating record of exactly 5 non-blank lines:
//!
//! ```text
//! dMomentum = <x> <y> <z>
//! dEnergy = <value>
//! <id> <px> <py> <pz> <vx> <vy> <vz>     (body 0)
//! <id> <px> <py> <pz> <vx> <vy> <vz>     (body 1)
//! <id> <px> <py> <pz> <vx> <vy> <vz>     (body 2)
//! ```
//!
//! Body ids follow the file convention 0 -> red, 1 -> blue, 2 -> green, with
//! mass fixed at 1. A trailing partial record (fewer than 5 lines left) is
//! silently discarded. Any malformed token fails the whole decode with a
//! descriptive error and no partial frame list is returned.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::simulation::states::{Body, ColorTag, NVec3};

/// One decoded playback record.
#[derive(Debug, Clone)]
pub struct TrajectoryFrame {
    pub d_momentum: NVec3, // momentum drift reported by the producer
    pub d_energy: f64, // energy drift reported by the producer
    pub bodies: [Body; 3],
}

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("IO error reading trajectory: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `{expected}`, got {got:?}")]
    UnexpectedLayout {
        line: usize,
        expected: &'static str,
        got: String,
    },

    #[error("line {line}: non-numeric token {token:?}")]
    BadNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} fields, got {got}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },
}

/// Render size given to every decoded body.
const DECODED_BODY_SIZE: f64 = 0.1;

/// Decode a whole trajectory text into frames.
pub fn decode(text: &str) -> Result<Vec<TrajectoryFrame>, TrajectoryError> {
    // Keep original line numbers for error reporting, drop blank lines
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    // Floor division: a trailing partial record is dropped, not parsed
    let num_frames = lines.len() / 5;
    let mut frames = Vec::with_capacity(num_frames);

    for f in 0..num_frames {
        let record = &lines[f * 5..f * 5 + 5];

        let d_momentum = parse_labeled_vector(record[0], "dMomentum")?;
        let d_energy = parse_labeled_scalar(record[1], "dEnergy")?;

        let b0 = parse_body_line(record[2])?;
        let b1 = parse_body_line(record[3])?;
        let b2 = parse_body_line(record[4])?;

        frames.push(TrajectoryFrame {
            d_momentum,
            d_energy,
            bodies: [b0, b1, b2],
        });
    }

    Ok(frames)
}

/// Decode a trajectory file from disk.
pub fn decode_file(path: &Path) -> Result<Vec<TrajectoryFrame>, TrajectoryError> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Split a line on whitespace and `=`, dropping empty tokens.
fn tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == '=')
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_f64(token: &str, line: usize) -> Result<f64, TrajectoryError> {
    token.parse::<f64>().map_err(|_| TrajectoryError::BadNumber {
        line,
        token: token.to_string(),
    })
}

/// Parse `label = <x> <y> <z>`.
fn parse_labeled_vector(
    (line, text): (usize, &str),
    label: &'static str,
) -> Result<NVec3, TrajectoryError> {
    let toks = tokens(text);
    if toks.first() != Some(&label) {
        return Err(TrajectoryError::UnexpectedLayout {
            line,
            expected: label,
            got: text.to_string(),
        });
    }
    if toks.len() != 4 {
        return Err(TrajectoryError::WrongFieldCount {
            line,
            expected: 4,
            got: toks.len(),
        });
    }
    Ok(NVec3::new(
        parse_f64(toks[1], line)?,
        parse_f64(toks[2], line)?,
        parse_f64(toks[3], line)?,
    ))
}

/// Parse `label = <value>`.
fn parse_labeled_scalar(
    (line, text): (usize, &str),
    label: &'static str,
) -> Result<f64, TrajectoryError> {
    let toks = tokens(text);
    if toks.first() != Some(&label) {
        return Err(TrajectoryError::UnexpectedLayout {
            line,
            expected: label,
            got: text.to_string(),
        });
    }
    if toks.len() != 2 {
        return Err(TrajectoryError::WrongFieldCount {
            line,
            expected: 2,
            got: toks.len(),
        });
    }
    parse_f64(toks[1], line)
}

/// Parse `<id> <px> <py> <pz> <vx> <vy> <vz>`.
fn parse_body_line((line, text): (usize, &str)) -> Result<Body, TrajectoryError> {
    let toks = tokens(text);
    if toks.len() != 7 {
        return Err(TrajectoryError::WrongFieldCount {
            line,
            expected: 7,
            got: toks.len(),
        });
    }

    let id: u32 = toks[0].parse().map_err(|_| TrajectoryError::BadNumber {
        line,
        token: toks[0].to_string(),
    })?;

    let mut vals = [0.0; 6];
    for (v, tok) in vals.iter_mut().zip(&toks[1..]) {
        *v = parse_f64(tok, line)?;
    }

    // File convention differs from the catalog: 1 is blue here, 2 is green
    let color = match id {
        0 => ColorTag::Red,
        1 => ColorTag::Blue,
        _ => ColorTag::Green,
    };

    Ok(Body {
        id,
        x: NVec3::new(vals[0], vals[1], vals[2]),
        v: NVec3::new(vals[3], vals[4], vals[5]),
        m: 1.0,
        color,
        size: DECODED_BODY_SIZE,
    })
}

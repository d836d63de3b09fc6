//! Output formatting for query results.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use word_ladder_core::{DegreeResult, LadderStats, NeighborResult};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Pretty-printed JSON
    Json,
}

pub fn format_path(
    from: &str,
    to: &str,
    path: Option<&[String]>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "from": from,
            "to": to,
            "path": path,
            "distance": distance_of(path),
        })),
        OutputFormat::Table => Ok(match path {
            None => format!("no ladder from {} to {}", from, to),
            Some([]) => format!("{} and {} are the same word", from, to),
            Some(steps) => {
                let mut out = format!("{:>6}  {}\n", "step", "word");
                out.push_str(&format!("{:->6}  {:-<12}\n", "", ""));
                for (i, word) in steps.iter().enumerate() {
                    out.push_str(&format!("{:>6}  {}\n", i, word));
                }
                out.push_str(&format!("({} edits)", steps.len() - 1));
                out
            }
        }),
    }
}

pub fn format_distance(from: &str, to: &str, distance: i32, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "from": from, "to": to, "distance": distance })),
        OutputFormat::Table => Ok(distance.to_string()),
    }
}

pub fn format_neighborhood(
    word: &str,
    neighbors: &[NeighborResult<String>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "word": word, "neighbors": neighbors })),
        OutputFormat::Table => {
            if neighbors.is_empty() {
                return Ok(format!("(no words reachable from {})", word));
            }
            let mut out = format!("{:>8}  {:<16}  {}\n", "distance", "word", "ladder");
            out.push_str(&format!("{:->8}  {:-<16}  {:-<24}\n", "", "", ""));
            for n in neighbors {
                out.push_str(&format!(
                    "{:>8}  {:<16}  {}\n",
                    n.distance,
                    n.vertex,
                    n.path.join(" -> ")
                ));
            }
            out.push_str(&format!("({} words)", neighbors.len()));
            Ok(out)
        }
    }
}

pub fn format_degree(results: &[DegreeResult<String>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&results),
        OutputFormat::Table => {
            let mut out = format!("{:>6}  {:<16}  {:>6}\n", "rank", "word", "degree");
            out.push_str(&format!("{:->6}  {:-<16}  {:->6}\n", "", "", ""));
            for (i, r) in results.iter().enumerate() {
                out.push_str(&format!("{:>6}  {:<16}  {:>6}\n", i + 1, r.vertex, r.degree));
            }
            out.push_str(&format!("({} words)", results.len()));
            Ok(out)
        }
    }
}

pub fn format_status(source: &str, stats: &LadderStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({ "dictionary": source, "stats": stats })),
        OutputFormat::Table => {
            let state = serde_json::to_value(stats.state)?;
            let rows = [
                ("dictionary", source.to_string()),
                ("state", state.as_str().unwrap_or_default().to_string()),
                ("words", stats.vertex_count.to_string()),
                ("edges", stats.edge_count.to_string()),
                ("graph memory", format_mb(stats.graph_memory_bytes)),
                ("table memory", format_mb(stats.table_memory_bytes)),
                ("max memory", format!("{}MB", stats.max_memory_mb)),
                ("populate", format!("{:.1}ms", stats.populate_ms)),
                ("precompute", format!("{:.1}ms", stats.precompute_ms)),
            ];
            Ok(rows
                .iter()
                .map(|(k, v)| format!("{:<14}{}", k, v))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

fn distance_of(path: Option<&[String]>) -> i32 {
    match path {
        Some(p) if !p.is_empty() => p.len() as i32 - 1,
        _ => -1,
    }
}

fn format_mb(bytes: usize) -> String {
    format!("~{:.1}MB", bytes as f64 / 1_048_576.0)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_table() {
        let path = words(&["CAT", "HAT", "HATE"]);
        let out = format_path("CAT", "HATE", Some(&path), OutputFormat::Table).unwrap();
        assert!(out.contains("     0  CAT"));
        assert!(out.contains("     2  HATE"));
        assert!(out.ends_with("(2 edits)"));
    }

    #[test]
    fn test_path_table_no_ladder() {
        let out = format_path("APPLE", "DRAG", None, OutputFormat::Table).unwrap();
        assert_eq!(out, "no ladder from APPLE to DRAG");
    }

    #[test]
    fn test_path_table_same_word() {
        let out = format_path("CAT", "CAT", Some(&[]), OutputFormat::Table).unwrap();
        assert_eq!(out, "CAT and CAT are the same word");
    }

    #[test]
    fn test_path_json() {
        let path = words(&["CAT", "HAT"]);
        let out = format_path("CAT", "HAT", Some(&path), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["distance"], 1);
        assert_eq!(v["path"][1], "HAT");

        let out = format_path("APPLE", "DRAG", None, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["distance"], -1);
        assert!(v["path"].is_null());
    }

    #[test]
    fn test_distance() {
        assert_eq!(format_distance("A", "B", -1, OutputFormat::Table).unwrap(), "-1");
        let out = format_distance("CAT", "HATER", 3, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["distance"], 3);
    }

    #[test]
    fn test_neighborhood_table() {
        let neighbors = vec![NeighborResult {
            vertex: "HAT".to_string(),
            distance: 1,
            path: words(&["CAT", "HAT"]),
        }];
        let out = format_neighborhood("CAT", &neighbors, OutputFormat::Table).unwrap();
        assert!(out.contains("CAT -> HAT"));
        assert!(out.ends_with("(1 words)"));

        let out = format_neighborhood("CAT", &[], OutputFormat::Table).unwrap();
        assert_eq!(out, "(no words reachable from CAT)");
    }

    #[test]
    fn test_degree_json() {
        let results = vec![DegreeResult {
            vertex: "HAT".to_string(),
            degree: 3,
        }];
        let out = format_degree(&results, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["vertex"], "HAT");
        assert_eq!(v[0]["degree"], 3);
    }
}

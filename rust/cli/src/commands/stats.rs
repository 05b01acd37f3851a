//! Statistics over recorded games.
//!
//! Reads JSONL game records (plain or `.jsonl.zst`, a single file or a
//! directory tree) and reports totals per result, the win rate and the mean
//! number of moves.

use crate::error::CliError;
use crate::io_utils::{is_record_file, read_text_auto};
use crate::ui;
use nines_engine::logger::{GameRecord, GameResult};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    games: u64,
    won: u64,
    lost: u64,
    abandoned: u64,
    total_moves: u64,
    /// Lines that are not valid game records
    corrupted: u64,
    /// A final line without a newline that failed to parse (interrupted write)
    incomplete: u64,
}

impl StatsState {
    fn add(&mut self, rec: &GameRecord) {
        self.games += 1;
        self.total_moves += rec.moves as u64;
        match rec.result {
            GameResult::Won => self.won += 1,
            GameResult::Lost => self.lost += 1,
            GameResult::Abandoned => self.abandoned += 1,
        }
    }

    fn consume(&mut self, source: &str, content: &str, err: &mut dyn Write) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .collect();
        let last = lines.len().saturating_sub(1);
        for (pos, (lineno, line)) in lines.iter().enumerate() {
            match serde_json::from_str::<GameRecord>(line) {
                Ok(rec) => self.add(&rec),
                Err(_) if pos == last && !has_trailing_nl => self.incomplete += 1,
                Err(e) => {
                    self.corrupted += 1;
                    ui::display_warning(
                        err,
                        &format!("{}:{}: skipped invalid record ({})", source, lineno + 1, e),
                    )?;
                }
            }
        }
        Ok(())
    }

    fn summary(&self) -> serde_json::Value {
        let rate = |n: u64| {
            if self.games == 0 {
                0.0
            } else {
                n as f64 / self.games as f64
            }
        };
        serde_json::json!({
            "games": self.games,
            "results": {
                "won": self.won,
                "lost": self.lost,
                "abandoned": self.abandoned,
            },
            "win_rate": rate(self.won),
            "mean_moves": rate(self.total_moves),
        })
    }
}

/// Aggregates statistics from game-record files.
///
/// # Errors
///
/// - [`CliError::Config`] if `input` cannot be read
/// - [`CliError::InvalidInput`] if a single file holds no valid record but
///   some invalid ones
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let Ok(rd) = std::fs::read_dir(&d) else {
                continue;
            };
            let mut entries: Vec<_> = rd.filter_map(Result::ok).map(|e| e.path()).collect();
            entries.sort();
            for p in entries {
                if p.is_dir() {
                    stack.push(p);
                } else if is_record_file(&p) {
                    let name = p.to_string_lossy();
                    match read_text_auto(&name) {
                        Ok(content) => state.consume(&name, &content, err)?,
                        Err(e) => {
                            state.corrupted += 1;
                            ui::display_warning(err, &format!("cannot read {}: {}", name, e))?;
                        }
                    }
                }
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(content) => state.consume(&input, &content, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::display_warning(err, &format!("Skipped {} invalid record(s)", state.corrupted))?;
    }
    if state.incomplete > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.incomplete),
        )?;
    }
    if !path.is_dir() && state.games == 0 && (state.corrupted > 0 || state.incomplete > 0) {
        ui::write_error(err, "no valid game records")?;
        return Err(CliError::InvalidInput("no valid game records".to_string()));
    }

    let json_output = serde_json::to_string_pretty(&state.summary())
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, result: GameResult, moves: usize) -> String {
        let rec = GameRecord {
            game_id: format!("20250101-{:06}", id),
            seed: Some(u64::from(id)),
            piles: 4,
            result,
            moves,
            deck_count: 0,
            events: Vec::new(),
            ts: None,
            meta: None,
        };
        serde_json::to_string(&rec).unwrap()
    }

    fn run_on(content: &str) -> (Result<(), CliError>, String, String) {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), content).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command(
            temp.path().to_str().unwrap().to_string(),
            &mut out,
            &mut err,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_stats_empty_file() {
        let (result, output, _) = run_on("");
        assert!(result.is_ok());
        assert!(output.contains("\"games\": 0"));
        assert!(output.contains("\"win_rate\": 0.0"));
    }

    #[test]
    fn test_stats_counts_results_and_means() {
        let content = format!(
            "{}\n{}\n{}\n{}\n",
            record(1, GameResult::Won, 100),
            record(2, GameResult::Lost, 50),
            record(3, GameResult::Lost, 30),
            record(4, GameResult::Abandoned, 20),
        );
        let (result, output, err) = run_on(&content);
        assert!(result.is_ok(), "stderr: {}", err);
        let v: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(v["games"], 4);
        assert_eq!(v["results"]["won"], 1);
        assert_eq!(v["results"]["lost"], 2);
        assert_eq!(v["results"]["abandoned"], 1);
        assert_eq!(v["win_rate"], 0.25);
        assert_eq!(v["mean_moves"], 50.0);
    }

    #[test]
    fn test_stats_warns_on_bad_lines() {
        let content = format!(
            "{}\nnot json\n{{\"game_id\":1}}\n{}\n",
            record(1, GameResult::Won, 10),
            record(2, GameResult::Lost, 10),
        );
        let (result, output, err) = run_on(&content);
        assert!(result.is_ok());
        assert!(output.contains("\"games\": 2"));
        assert!(err.contains(":2: skipped invalid record"));
        assert!(err.contains(":3: skipped invalid record"));
        assert!(err.contains("Skipped 2 invalid record(s)"));
    }

    #[test]
    fn test_stats_discards_truncated_last_line() {
        let full = record(1, GameResult::Won, 10);
        let content = format!("{}\n{}", full, &full[..full.len() / 2]);
        let (result, output, err) = run_on(&content);
        assert!(result.is_ok());
        assert!(output.contains("\"games\": 1"));
        assert!(err.contains("Discarded 1 incomplete final line(s)"));
    }

    #[test]
    fn test_stats_fails_when_nothing_is_valid() {
        let (result, _, err) = run_on("garbage\n");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("no valid game records"));
    }

    #[test]
    fn test_stats_missing_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

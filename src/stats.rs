//! Aggregate statistics over parsed pulls.

use std::fmt::{self, Write as _};

use crate::combatlog::PullRecord;

const RULE_WIDTH: usize = 60;

/// Mean coverage of one buff label across all pulls that tracked it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuffCoverage {
    pub label: String,
    pub average: f64,
    /// Number of bars averaged.
    pub samples: usize,
}

/// Summary figures for a set of pulls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total_entries: usize,
    /// `(profile, pulls)` by pull count, descending.
    pub profiles: Vec<(String, usize)>,
    /// Coverage per label by average, descending.
    pub coverage: Vec<BuffCoverage>,
    pub first_date_time: Option<String>,
    pub last_date_time: Option<String>,
}

impl Statistics {
    /// Compute statistics. Ties in either ranking keep first-seen order.
    pub fn from_pulls(pulls: &[PullRecord]) -> Self {
        let mut profiles: Vec<(String, usize)> = Vec::new();
        for pull in pulls {
            match profiles.iter_mut().find(|(name, _)| *name == pull.profile_name) {
                Some((_, count)) => *count += 1,
                None => profiles.push((pull.profile_name.clone(), 1)),
            }
        }
        profiles.sort_by(|a, b| b.1.cmp(&a.1));

        // (label, sum of percentages, bars)
        let mut sums: Vec<(String, u64, usize)> = Vec::new();
        for bar in pulls.iter().flat_map(|p| &p.bars) {
            match sums.iter_mut().find(|(label, _, _)| *label == bar.label) {
                Some((_, total, count)) => {
                    *total = total.saturating_add(bar.percentage);
                    *count += 1;
                }
                None => sums.push((bar.label.clone(), bar.percentage, 1)),
            }
        }
        let mut coverage: Vec<BuffCoverage> = sums
            .into_iter()
            .map(|(label, total, samples)| BuffCoverage {
                label,
                average: total as f64 / samples as f64,
                samples,
            })
            .collect();
        coverage.sort_by(|a, b| b.average.total_cmp(&a.average));

        Self {
            total_entries: pulls.len(),
            profiles,
            coverage,
            first_date_time: pulls.first().map(|p| p.date_time.clone()),
            last_date_time: pulls.last().map(|p| p.date_time.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }

    /// Human readable statistics block.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No logs found");
        }

        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        writeln!(out, "{rule}")?;
        writeln!(out, "Statistics")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Total entries: {}", self.total_entries)?;

        writeln!(out)?;
        writeln!(out, "Pulls by Profile:")?;
        for (profile, count) in &self.profiles {
            writeln!(out, "  {profile}: {count}")?;
        }

        writeln!(out)?;
        writeln!(out, "Average Buff Coverage:")?;
        for buff in &self.coverage {
            writeln!(out, "  {:20}: {:5.1}%", buff.label, buff.average)?;
        }

        writeln!(out)?;
        if let Some(first) = &self.first_date_time {
            writeln!(out, "First entry: {first}")?;
        }
        if let Some(last) = &self.last_date_time {
            writeln!(out, "Last entry: {last}")?;
        }
        writeln!(out, "{rule}")?;

        f.write_str(&out)
    }
}

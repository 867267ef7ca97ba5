//! Plain text report.
//!
//! A header with the generation time, the player roster grouped by class,
//! then one block per pull with a status line for each tracked buff.

use std::io::Write;

use anyhow::Result;

use super::ExportContext;
use crate::combatlog::players::player_names;
use crate::combatlog::{PullRecord, Roster};

const BANNER_WIDTH: usize = 80;
const TITLE: &str = "RABuffs Logger Export (from WoWCombatLog.txt)";

pub fn write_to<W: Write>(pulls: &[PullRecord], ctx: &ExportContext, w: &mut W) -> Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(w, "{banner}")?;
    writeln!(w, "{TITLE}")?;
    writeln!(w, "Generated: {}", ctx.generated.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w, "Total Entries: {}", pulls.len())?;
    writeln!(w, "{banner}")?;
    writeln!(w)?;

    let roster = Roster::from_pulls(pulls);
    if !roster.is_empty() {
        writeln!(w, "{banner}")?;
        writeln!(w, "PLAYER ROSTER ({} players)", roster.len())?;
        writeln!(w, "{banner}")?;
        writeln!(w)?;
        for (class, names) in roster.by_class() {
            writeln!(w, "{class} : {}", names.join(", "))?;
        }
        writeln!(w)?;
        writeln!(w, "{banner}")?;
        writeln!(w)?;
    }

    for (i, pull) in pulls.iter().enumerate() {
        write_pull(w, i + 1, pull, ctx)?;
    }

    Ok(())
}

fn write_pull<W: Write>(
    w: &mut W,
    number: usize,
    pull: &PullRecord,
    ctx: &ExportContext,
) -> Result<()> {
    writeln!(w, "--- Entry #{number} ---")?;
    writeln!(w, "Log Timestamp: {}", pull.log_timestamp)?;
    writeln!(w, "DateTime: {}", pull.date_time)?;
    writeln!(
        w,
        "Real Time: {} | Server Time: {}",
        pull.real_time, pull.server_time
    )?;
    writeln!(
        w,
        "Pull: {} | Triggered by: {}",
        pull.pull_number, pull.source_player
    )?;
    writeln!(w, "Character: {}-{}", pull.character, pull.realm)?;
    writeln!(
        w,
        "Profile: {} | Group: {} ({} players)",
        pull.profile_name, pull.group_type, pull.group_size
    )?;
    writeln!(w, "Target: {}", pull.target)?;
    writeln!(w)?;
    writeln!(w, "Buffs Status:")?;

    for bar in &pull.bars {
        let status = ctx.report.status(bar.percentage);
        writeln!(
            w,
            "  [{}] {:20}: {:3}/{:3} ({:3}%) [Fading: {}]",
            status.symbol(),
            bar.label,
            bar.buffed,
            bar.total,
            bar.percentage,
            bar.fading
        )?;

        let with = player_names(&bar.players_with_buff);
        if !with.is_empty() {
            writeln!(w, "      With buff: {}", with.join(", "))?;
        }
        let without = player_names(&bar.players_without_buff);
        if !without.is_empty() {
            writeln!(w, "      Without buff: {}", without.join(", "))?;
        }

        if bar.has_player_lists() {
            writeln!(w)?;
        }
    }

    writeln!(w)?;
    Ok(())
}

//! CSV export, one row per bar.
//!
//! Quoting follows RFC 4180: a field is quoted only when it contains a
//! comma, a double quote, or a line break, and embedded quotes are doubled.
//! Rows end with `\r\n`.

use std::io::Write;

use anyhow::Result;

use crate::combatlog::players::parse_players;
use crate::combatlog::{PlayerRef, PullRecord};

pub const HEADER: [&str; 27] = [
    "EntryID",
    "LogTimestamp",
    "DateTime",
    "RealTime",
    "ServerTime",
    "PullNumber",
    "Character",
    "Realm",
    "Profile",
    "GroupType",
    "GroupSize",
    "SourcePlayer",
    "Target",
    "BuffLabel",
    "BuffKey",
    "Buffed",
    "Total",
    "Percentage",
    "Fading",
    "TargetGroups",
    "TargetClasses",
    "PlayersWithBuff_Names",
    "PlayersWithBuff_Classes",
    "PlayersWithBuff_Groups",
    "PlayersWithoutBuff_Names",
    "PlayersWithoutBuff_Classes",
    "PlayersWithoutBuff_Groups",
];

pub fn write_to<W: Write>(pulls: &[PullRecord], w: &mut W) -> Result<()> {
    write_record(w, HEADER)?;

    for (i, pull) in pulls.iter().enumerate() {
        for bar in &pull.bars {
            let [with_names, with_classes, with_groups] =
                split_columns(&parse_players(&bar.players_with_buff));
            let [without_names, without_classes, without_groups] =
                split_columns(&parse_players(&bar.players_without_buff));

            write_record(
                w,
                [
                    (i + 1).to_string(),
                    pull.log_timestamp.clone(),
                    pull.date_time.clone(),
                    pull.real_time.clone(),
                    pull.server_time.clone(),
                    pull.pull_number.to_string(),
                    pull.character.clone(),
                    pull.realm.clone(),
                    pull.profile_name.clone(),
                    pull.group_type.clone(),
                    pull.group_size.to_string(),
                    pull.source_player.clone(),
                    pull.target.clone(),
                    bar.label.clone(),
                    bar.buff_key.clone(),
                    bar.buffed.to_string(),
                    bar.total.to_string(),
                    bar.percentage.to_string(),
                    bar.fading.to_string(),
                    bar.groups.clone(),
                    bar.classes.clone(),
                    with_names,
                    with_classes,
                    with_groups,
                    without_names,
                    without_classes,
                    without_groups,
                ],
            )?;
        }
    }

    Ok(())
}

/// Names, classes and groups, each joined with `", "`.
fn split_columns(players: &[PlayerRef]) -> [String; 3] {
    let join = |f: fn(&PlayerRef) -> String| {
        players.iter().map(f).collect::<Vec<_>>().join(", ")
    };
    [
        join(|p| p.name.clone()),
        join(|p| p.class.clone()),
        join(|p| p.group.to_string()),
    ]
}

fn write_record<W, I, S>(w: &mut W, fields: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        write_field(w, field.as_ref())?;
    }
    w.write_all(b"\r\n")?;
    Ok(())
}

fn write_field<W: Write>(w: &mut W, field: &str) -> Result<()> {
    if field.contains([',', '"', '\r', '\n']) {
        write!(w, "\"{}\"", field.replace('"', "\"\""))?;
    } else {
        w.write_all(field.as_bytes())?;
    }
    Ok(())
}

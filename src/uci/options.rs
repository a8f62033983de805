//! `setoption` handling for the search configuration.

use crate::engine::SearchConfig;

use super::UciError;

/// Split `name <N...> value <V...>` into the option name and optional value.
#[must_use]
pub fn parse_setoption(args: &[&str]) -> Option<(String, Option<String>)> {
    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in args {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

/// Apply one option to `config`. Names are matched case-insensitively with
/// spaces ignored, so `Move Overhead` and `moveoverhead` are the same option.
pub fn apply_setoption(
    config: &mut SearchConfig,
    name: &str,
    value: Option<&str>,
) -> Result<(), UciError> {
    let normalized: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let invalid = || UciError::InvalidValue {
        name: name.to_string(),
        value: value.unwrap_or_default().to_string(),
    };
    let number = || -> Result<u64, UciError> {
        value
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(invalid)
    };

    match normalized.as_str() {
        "breadthlimit" => {
            let limit = usize::try_from(number()?).map_err(|_| invalid())?;
            *config = config.clone().with_breadth_limit(limit);
        }
        "rankingdepth" => {
            let depth = u32::try_from(number()?).map_err(|_| invalid())?;
            *config = config.clone().with_ranking_depth(depth);
        }
        "maxdepth" => {
            let depth = u32::try_from(number()?).map_err(|_| invalid())?;
            *config = config.clone().with_max_depth(depth);
        }
        "defaultmovetime" => config.default_movetime_ms = number()?,
        "moveoverhead" => config.move_overhead_ms = number()?,
        _ => return Err(UciError::UnknownOption(name.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_MOVES;
    use crate::engine::MAX_RANKING_DEPTH;

    #[test]
    fn parse_splits_name_and_value() {
        assert_eq!(
            parse_setoption(&["name", "Move", "Overhead", "value", "30"]),
            Some(("Move Overhead".to_string(), Some("30".to_string())))
        );
        assert_eq!(
            parse_setoption(&["name", "Clear", "Hash"]),
            Some(("Clear Hash".to_string(), None))
        );
        assert_eq!(parse_setoption(&["value", "3"]), None);
        assert_eq!(parse_setoption(&[]), None);
    }

    #[test]
    fn apply_updates_config() {
        let mut config = SearchConfig::default();
        apply_setoption(&mut config, "BreadthLimit", Some("3")).unwrap();
        apply_setoption(&mut config, "Ranking Depth", Some("2")).unwrap();
        apply_setoption(&mut config, "maxdepth", Some("6")).unwrap();
        apply_setoption(&mut config, "Default MoveTime", Some("400")).unwrap();
        apply_setoption(&mut config, "Move Overhead", Some("10")).unwrap();

        assert_eq!(
            config,
            SearchConfig {
                breadth_limit: 3,
                ranking_depth: 2,
                max_depth: 6,
                default_movetime_ms: 400,
                move_overhead_ms: 10,
            }
        );
    }

    #[test]
    fn apply_clamps_to_usable_range() {
        let mut config = SearchConfig::default();
        apply_setoption(&mut config, "BreadthLimit", Some("0")).unwrap();
        assert_eq!(config.breadth_limit, 1);
        apply_setoption(&mut config, "BreadthLimit", Some("100000")).unwrap();
        assert_eq!(config.breadth_limit, MAX_MOVES);
        apply_setoption(&mut config, "MaxDepth", Some("0")).unwrap();
        assert_eq!(config.max_depth, 1);
        apply_setoption(&mut config, "RankingDepth", Some("5")).unwrap();
        assert_eq!(config.ranking_depth, MAX_RANKING_DEPTH);
    }

    #[test]
    fn bad_options_leave_config_untouched() {
        let mut config = SearchConfig::default();
        assert_eq!(
            apply_setoption(&mut config, "Hash", Some("64")),
            Err(UciError::UnknownOption("Hash".to_string()))
        );
        assert!(apply_setoption(&mut config, "MaxDepth", Some("deep")).is_err());
        assert!(apply_setoption(&mut config, "MaxDepth", None).is_err());
        assert!(apply_setoption(&mut config, "MoveOverhead", Some("-5")).is_err());
        assert_eq!(config, SearchConfig::default());
    }
}

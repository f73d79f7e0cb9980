use std::path::PathBuf;

use crate::consts::{
    CONFIG_PATH, RANDOM_MAP_DEFAULT_SIDE, RANDOM_MAP_MAX_SIDE, RANDOM_MAP_MIN_SIDE,
};
use crate::error::FlagError;

#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    /// Whatever the config names, or the built-in level
    Default,
    File(PathBuf),
    Random(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    pub map: MapSource,
    pub config: PathBuf,
}

pub fn parse_flags<I>(args: I) -> Result<Flags, FlagError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    iter.next();

    let mut map_path = None;
    let mut random_side = None;
    let mut config = PathBuf::from(CONFIG_PATH);
    let args: Vec<String> = iter.collect();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "-m" | "--map" => {
                let value = value.ok_or_else(|| FlagError::MissingValue {
                    flag: flag.to_string(),
                })?;
                map_path = Some(PathBuf::from(value));
                i += 2;
            }
            "-c" | "--config" => {
                let value = value.ok_or_else(|| FlagError::MissingValue {
                    flag: flag.to_string(),
                })?;
                config = PathBuf::from(value);
                i += 2;
            }
            "-rm" | "--random-map" => match value {
                // Side length is optional
                Some(value) if !value.starts_with('-') => {
                    let side = value
                        .parse::<usize>()
                        .map_err(|_| FlagError::BadNumber(value.clone()))?;
                    if !(RANDOM_MAP_MIN_SIDE..=RANDOM_MAP_MAX_SIDE).contains(&side) {
                        return Err(FlagError::RandomMapSide {
                            min: RANDOM_MAP_MIN_SIDE,
                            max: RANDOM_MAP_MAX_SIDE,
                            got: side,
                        });
                    }
                    random_side = Some(side);
                    i += 2;
                }
                _ => {
                    random_side = Some(RANDOM_MAP_DEFAULT_SIDE);
                    i += 1;
                }
            },
            other => return Err(FlagError::Unknown(other.to_string())),
        }
    }

    let map = match (map_path, random_side) {
        (Some(_), Some(_)) => return Err(FlagError::ConflictingMaps),
        (Some(path), None) => MapSource::File(path),
        (None, Some(side)) => MapSource::Random(side),
        (None, None) => MapSource::Default,
    };

    Ok(Flags { map, config })
}

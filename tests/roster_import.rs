use std::io::Write;

use lineup_rotation::error::RosterError;
use lineup_rotation::roster::load_roster;
use lineup_rotation::rotation::{generate_rotation, Position, RotationSettings};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_roster_and_plans_from_it() {
    let file = write_csv(
        "Player ID,Player Name,Preferred Position,Batting Order,Jersey Number,Can't Pitch,Can't Catch\n\
         1,Ava,P,1,12,,yes\n\
         2,Ben,C,2,3,yes,\n\
         3,Cal,1B,3,,yes,yes\n\
         4,Dee,2B,4,8,yes,yes\n\
         5,Eli,3B,5,,yes,yes\n\
         6,Fay,SS,6,,yes,yes\n\
         7,Gus,LF,7,,yes,yes\n\
         8,Hal,CF,8,,yes,yes\n\
         9,Ivy,RF,9,,yes,yes\n\
         10,Jo,,10,,yes,yes\n",
    );

    let players = load_roster(file.path()).expect("roster loads");
    assert_eq!(players.len(), 10);
    assert_eq!(players[0].jersey_number.as_deref(), Some("12"));
    assert_eq!(players[9].position, Position::Bench);

    let rotation = generate_rotation(&players, &RotationSettings::default());
    for inning in &rotation {
        for a in inning {
            match a.position {
                Position::Pitcher => assert_eq!(a.player_id, "1"),
                Position::Catcher => assert_eq!(a.player_id, "2"),
                _ => {}
            }
        }
    }
}

#[test]
fn missing_file_is_a_csv_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_roster(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(RosterError::Csv(_))));
}

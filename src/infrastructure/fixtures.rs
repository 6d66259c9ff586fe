// SPDX-License-Identifier: MPL-2.0
//! Literal records served by the mock data source.

use crate::domain::team::{
    AttendanceRecord, Checkup, CheckupKind, CheckupStatus, Difficulty, Drill, DrillKind,
    MedicalEvent, MedicalRecord, MedicalStatus, Player, PlayerStatus, Position, SessionStatus,
    Sport, Team, TrainingSession,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Identifier of the team selected on first launch.
pub const DEFAULT_TEAM_ID: &str = "senior";

#[must_use]
pub fn teams() -> Vec<Team> {
    [
        ("senior", "Senior Squad"),
        ("u19", "Under 19"),
        ("u17", "Under 17"),
    ]
    .into_iter()
    .map(|(id, name)| Team {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

fn player(
    id: u32,
    name: &str,
    number: u8,
    position: Position,
    status: PlayerStatus,
    age: u8,
    attendance_percent: u8,
) -> Player {
    Player {
        id,
        name: name.to_string(),
        number,
        position,
        status,
        age,
        attendance_percent,
    }
}

/// Roster of a team. Unknown team ids get an empty roster.
#[must_use]
pub fn roster(team_id: &str) -> Vec<Player> {
    use PlayerStatus::{Available, Injured, Suspended};
    use Position::{Defender, Forward, Goalkeeper, Midfielder};

    match team_id {
        "senior" => vec![
            player(1, "Ahmed Mostafa", 1, Goalkeeper, Available, 28, 96),
            player(2, "Karim Adel", 4, Defender, Available, 26, 91),
            player(3, "Youssef Nabil", 5, Defender, Injured, 24, 78),
            player(4, "Omar Farouk", 8, Midfielder, Available, 23, 94),
            player(5, "Hassan Tarek", 10, Midfielder, Suspended, 27, 88),
            player(6, "Mahmoud Samir", 9, Forward, Available, 22, 90),
            player(7, "Ali Hamdy", 11, Forward, Injured, 25, 72),
            player(8, "Mostafa Ibrahim", 3, Defender, Available, 29, 93),
        ],
        "u19" => vec![
            player(21, "Ziad Khaled", 1, Goalkeeper, Available, 18, 97),
            player(22, "Seif Ashraf", 6, Defender, Available, 18, 89),
            player(23, "Adham Wael", 7, Midfielder, Injured, 17, 70),
            player(24, "Marwan Essam", 9, Forward, Available, 18, 92),
        ],
        "u17" => vec![
            player(41, "Yassin Hany", 1, Goalkeeper, Available, 16, 95),
            player(42, "Hamza Reda", 8, Midfielder, Available, 16, 87),
            player(43, "Malek Sherif", 10, Forward, Suspended, 16, 81),
        ],
        _ => Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn drill(
    id: u32,
    title: &str,
    description: &str,
    minutes: u32,
    tags: (Sport, DrillKind, Difficulty),
    players: &str,
    space: &str,
    equipment: &str,
) -> Drill {
    let (sport, kind, difficulty) = tags;
    Drill {
        id,
        title: title.to_string(),
        description: description.to_string(),
        minutes,
        sport,
        kind,
        difficulty,
        players: players.to_string(),
        space: space.to_string(),
        instructions: String::new(),
        equipment: equipment.to_string(),
        author: "Coach Ahmed Hassan".to_string(),
        favorite: false,
    }
}

#[must_use]
pub fn drills() -> Vec<Drill> {
    use Difficulty::{Advanced, Beginner, Intermediate};
    use DrillKind::{Physical, Tactical, Technical};
    use Sport::{Basketball, Football, Volleyball};

    let mut passing = drill(
        1,
        "Advanced Passing Combinations",
        "Complex passing sequences to improve ball control and team coordination under pressure.",
        15,
        (Football, Technical, Intermediate),
        "8-12 Players",
        "Half Pitch",
        "Cones, Footballs, Bibs",
    );
    passing.instructions = "Set up cones in a diamond formation. Players pass in sequence \
        while moving to different positions. Focus on first touch and quick passing."
        .to_string();
    passing.favorite = true;

    let mut shooting = drill(
        2,
        "Precision Shooting Training",
        "Target-based shooting exercises to improve accuracy and power in various game situations.",
        20,
        (Football, Technical, Advanced),
        "6-10 Players",
        "Penalty Area",
        "Goals, Footballs, Target markers",
    );
    shooting.instructions = "Set up targets in goal corners. Players take shots from different \
        angles and distances. Focus on accuracy over power."
        .to_string();

    vec![
        passing,
        shooting,
        drill(
            3,
            "High Press Triggers",
            "Team pressing shape and cues for winning the ball back in the opponent half.",
            35,
            (Football, Tactical, Advanced),
            "14-22 Players",
            "Full Pitch",
            "Bibs, Cones, Footballs",
        ),
        drill(
            4,
            "Shuttle Run Intervals",
            "Repeated sprint ability with short recovery windows.",
            12,
            (Football, Physical, Beginner),
            "Any",
            "Touchline",
            "Cones, Stopwatch",
        ),
        drill(
            5,
            "Pick and Roll Reads",
            "Two-player actions reading the hedge and the drop coverage.",
            25,
            (Basketball, Tactical, Intermediate),
            "4-10 Players",
            "Half Court",
            "Basketballs",
        ),
        drill(
            6,
            "Form Shooting Ladder",
            "Close-range shooting progression focusing on elbow alignment.",
            10,
            (Basketball, Technical, Beginner),
            "1-6 Players",
            "Key",
            "Basketballs",
        ),
        drill(
            7,
            "Serve Receive Rotation",
            "Passing platform work against float and jump serves.",
            30,
            (Volleyball, Technical, Intermediate),
            "6-12 Players",
            "Full Court",
            "Volleyballs, Net",
        ),
        drill(
            8,
            "Block Footwork Circuit",
            "Lateral movement and timing for double blocks.",
            45,
            (Volleyball, Physical, Advanced),
            "6-12 Players",
            "Net Zone",
            "Net, Agility ladder",
        ),
    ]
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn session(
    id: u32,
    title: &str,
    sport: Sport,
    status: SessionStatus,
    starts_at: NaiveDateTime,
    minutes: u32,
    location: &str,
) -> TrainingSession {
    TrainingSession {
        id,
        title: title.to_string(),
        sport,
        status,
        starts_at,
        minutes,
        location: location.to_string(),
    }
}

#[must_use]
pub fn sessions() -> Vec<TrainingSession> {
    use SessionStatus::{Cancelled, Completed, Scheduled};
    use Sport::{Basketball, Football, Volleyball};

    vec![
        session(1, "Tactical Training", Football, Completed, at(2024, 3, 11, 9, 0), 90, "Main Pitch"),
        session(2, "Fitness Session", Football, Completed, at(2024, 3, 12, 17, 30), 60, "Gym"),
        session(3, "Shooting Practice", Basketball, Cancelled, at(2024, 3, 13, 18, 0), 75, "Court B"),
        session(4, "Match Preparation", Football, Scheduled, at(2024, 3, 15, 10, 0), 90, "Main Pitch"),
        session(5, "Serve and Block", Volleyball, Scheduled, at(2024, 3, 16, 16, 0), 60, "Sports Hall"),
        session(6, "Recovery Swim", Football, Scheduled, at(2024, 3, 17, 11, 0), 45, "Aquatic Center"),
    ]
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn attendance(
    id: u32,
    session: &str,
    date: NaiveDate,
    (present, late, absent, excused): (usize, usize, usize, usize),
) -> AttendanceRecord {
    AttendanceRecord {
        id,
        session: session.to_string(),
        date,
        present,
        late,
        absent,
        excused,
    }
}

/// Saved attendance of a team, newest first.
#[must_use]
pub fn attendance_history(team_id: &str) -> Vec<AttendanceRecord> {
    match team_id {
        "senior" => vec![
            attendance(3, "Fitness Session", day(2024, 3, 12), (6, 1, 1, 0)),
            attendance(2, "Tactical Training", day(2024, 3, 11), (7, 0, 0, 1)),
            attendance(1, "Evening Training", day(2024, 3, 8), (5, 1, 2, 0)),
        ],
        "u19" => vec![attendance(11, "Morning Training", day(2024, 3, 12), (3, 0, 0, 1))],
        _ => Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn medical(
    player_id: u32,
    name: &str,
    team: &str,
    position: Position,
    status: MedicalStatus,
    injury: Option<&str>,
    recovery: Option<&str>,
    last_checkup: NaiveDate,
) -> MedicalRecord {
    MedicalRecord {
        player_id,
        name: name.to_string(),
        team: team.to_string(),
        position,
        status,
        injury: injury.map(str::to_string),
        recovery: recovery.map(str::to_string),
        last_checkup,
        history: vec![MedicalEvent {
            date: last_checkup,
            title: "Checkup".to_string(),
            note: format!("Status: {}", status.label()),
        }],
    }
}

/// Medical files across all teams.
#[must_use]
pub fn medical_records() -> Vec<MedicalRecord> {
    use MedicalStatus::{Fit, Injured, Recovering};
    use Position::{Defender, Forward, Goalkeeper, Midfielder};

    let mut records = vec![
        medical(1, "Ahmed Mostafa", "Senior Squad", Goalkeeper, Fit, None, None, day(2024, 3, 4)),
        medical(
            3,
            "Youssef Nabil",
            "Senior Squad",
            Defender,
            Injured,
            Some("Hamstring strain"),
            Some("2-3 weeks"),
            day(2024, 3, 10),
        ),
        medical(4, "Omar Farouk", "Senior Squad", Midfielder, Fit, None, None, day(2024, 3, 5)),
        medical(
            7,
            "Ali Hamdy",
            "Senior Squad",
            Forward,
            Recovering,
            None,
            Some("1 week"),
            day(2024, 3, 9),
        ),
        medical(
            23,
            "Adham Wael",
            "Under 19",
            Midfielder,
            Injured,
            Some("Ankle sprain"),
            Some("10 days"),
            day(2024, 3, 11),
        ),
        medical(24, "Marwan Essam", "Under 19", Forward, Fit, None, None, day(2024, 3, 6)),
        medical(42, "Hamza Reda", "Under 17", Midfielder, Fit, None, None, day(2024, 3, 7)),
    ];
    if let Some(youssef) = records.iter_mut().find(|r| r.player_id == 3) {
        youssef.history.insert(
            0,
            MedicalEvent {
                date: day(2024, 2, 27),
                title: "Injury reported".to_string(),
                note: "Felt tightness during sprint drills".to_string(),
            },
        );
    }
    records
}

#[allow(clippy::too_many_arguments)]
fn checkup(
    id: u32,
    player_id: u32,
    player: &str,
    team: &str,
    kind: CheckupKind,
    status: CheckupStatus,
    at: NaiveDateTime,
    findings: &str,
) -> Checkup {
    Checkup {
        id,
        player_id,
        player: player.to_string(),
        team: team.to_string(),
        kind,
        status,
        at,
        location: "Medical Room".to_string(),
        findings: findings.to_string(),
    }
}

#[must_use]
pub fn checkups() -> Vec<Checkup> {
    use CheckupKind::{Fitness, Injury, PreMatch, Routine};
    use CheckupStatus::{Cancelled, Completed, Scheduled};

    vec![
        checkup(1, 3, "Youssef Nabil", "Senior Squad", Injury, Completed, at(2024, 3, 10, 10, 0), "Grade 1 strain"),
        checkup(2, 1, "Ahmed Mostafa", "Senior Squad", Routine, Completed, at(2024, 3, 4, 9, 30), "No issues"),
        checkup(3, 7, "Ali Hamdy", "Senior Squad", Fitness, Scheduled, at(2024, 3, 14, 11, 0), ""),
        checkup(4, 23, "Adham Wael", "Under 19", Injury, Scheduled, at(2024, 3, 15, 9, 0), ""),
        checkup(5, 24, "Marwan Essam", "Under 19", PreMatch, Cancelled, at(2024, 3, 13, 16, 0), ""),
        checkup(6, 42, "Hamza Reda", "Under 17", Routine, Scheduled, at(2024, 3, 18, 10, 30), ""),
    ]
}

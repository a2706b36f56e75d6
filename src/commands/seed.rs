//! Seed command: load the demonstration league
//!
//! Two teams and three players, a correction to the first player, one match
//! between the teams, two statistic lines and two availability records (one
//! of them an injury). The listings are captured, then the third player is
//! removed.

use std::path::PathBuf;

use super::resolve_db_path;
use crate::{
    storage::{
        AvailabilityStatus, LeagueDatabase, Match, NewAvailability, NewMatch, NewPlayer,
        NewStatistic, NewTeam, Player, PlayerUpdate, Statistic, Team,
    },
    PlayerId, Result, TeamId,
};

/// Everything the seed created
#[derive(Debug, Clone)]
pub struct DemoLeague {
    pub teams: Vec<Team>,
    /// The three players, with the first one already updated
    pub players: Vec<Player>,
    pub game: Match,
    pub statistics: Vec<Statistic>,
    pub availability: Vec<AvailabilityStatus>,
    /// Listings read back before the removal
    pub listings: DemoListings,
    pub removed: PlayerId,
    /// All players left after the removal
    pub remaining: Vec<Player>,
}

#[derive(Debug, Clone, Default)]
pub struct DemoListings {
    pub home_players: Vec<Player>,
    pub home_matches: Vec<Match>,
    pub statistics: Vec<Statistic>,
    pub availability: Vec<AvailabilityStatus>,
}

fn team(name: &str, city: &str, coach: &str) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        city: city.to_string(),
        coach: coach.to_string(),
    }
}

fn player(first: &str, last: &str, position: &str, number: u32, team_id: TeamId) -> NewPlayer {
    NewPlayer {
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: position.to_string(),
        number,
        team_id,
    }
}

/// Insert the demonstration league through the regular accessors
pub fn seed_demo_league(db: &mut LeagueDatabase) -> Result<DemoLeague> {
    let leones = db.create_team(team("Los Leones", "Bogotá", "Carlos Pérez"))?;
    let panteras = db.create_team(team("Las Panteras", "Cali", "Ana García"))?;

    let juan = db.create_player(player("Juan", "Pérez", "Opuesto", 1, leones.id))?;
    let maria = db.create_player(player("María", "Gómez", "Central", 5, leones.id))?;
    let andres = db.create_player(player("Andrés", "Rodríguez", "Libero", 10, panteras.id))?;

    let juan = db.update_player(
        juan.id,
        PlayerUpdate {
            first_name: Some("Juan Carlos".to_string()),
            number: Some(2),
            ..Default::default()
        },
    )?;

    let game = db.create_match(NewMatch {
        date: "2024-05-20".to_string(),
        time: "8:00 PM".to_string(),
        home_team_id: leones.id,
        away_team_id: panteras.id,
    })?;

    let statistics = vec![
        db.create_statistic(NewStatistic {
            points: 20,
            blocks: 5,
            ..NewStatistic::new(juan.id, game.id)
        })?,
        db.create_statistic(NewStatistic {
            points: 10,
            blocks: 2,
            ..NewStatistic::new(maria.id, game.id)
        })?,
    ];

    let availability = vec![
        db.create_availability(NewAvailability {
            player_id: juan.id,
            match_id: game.id,
            available: true,
            injury_type: None,
        })?,
        db.create_availability(NewAvailability {
            player_id: andres.id,
            match_id: game.id,
            available: false,
            injury_type: Some("Esguince de tobillo".to_string()),
        })?,
    ];

    let listings = DemoListings {
        home_players: db.list_team_players(leones.id)?.unwrap_or_default(),
        home_matches: db.list_team_matches(leones.id)?.unwrap_or_default(),
        statistics: db.list_match_statistics(game.id)?.unwrap_or_default(),
        availability: db.list_match_availability(game.id)?.unwrap_or_default(),
    };

    db.delete_player(andres.id)?;
    let remaining = db.list_players()?;

    Ok(DemoLeague {
        teams: vec![leones, panteras],
        players: vec![juan, maria, andres.clone()],
        game,
        statistics,
        availability,
        listings,
        removed: andres.id,
        remaining,
    })
}

/// Handle the seed command
pub fn handle_seed(db_path: Option<PathBuf>) -> Result<()> {
    let db_path = resolve_db_path(db_path)?;
    let mut db = LeagueDatabase::open(&db_path)?;

    let league = seed_demo_league(&mut db)?;
    println!("✓ Demo league loaded into {}", db_path.display());

    let home = &league.teams[0];
    let away = &league.teams[1];
    let game = league.game.describe(home, away);
    let describe_team = |id: TeamId| {
        league
            .teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("team {}", id))
    };
    let find_player = |id: PlayerId| league.players.iter().find(|p| p.id == id);

    println!("\nTeams: {}, {}", home, away);
    println!("Updated player: {}", league.players[0]);
    println!("Match: {}", game);

    println!("\nPlayers of {}:", home.name);
    for p in &league.listings.home_players {
        println!("  {}", p);
    }

    println!("\nMatches of {}:", home.name);
    for m in &league.listings.home_matches {
        println!(
            "  {} vs {} ({} {})",
            describe_team(m.home_team_id),
            describe_team(m.away_team_id),
            m.date,
            m.time
        );
    }

    println!("\nStatistics of {}:", game);
    for s in &league.listings.statistics {
        match find_player(s.player_id) {
            Some(p) => println!("  {}", s.describe(p)),
            None => println!("  {}", s),
        }
    }

    println!("\nAvailability for {}:", game);
    for s in &league.listings.availability {
        match find_player(s.player_id) {
            Some(p) => println!("  {}", s.describe(p, &game)),
            None => println!("  {}", s),
        }
    }

    println!("\n✓ Player {} deleted", league.removed);

    println!("\nAll players:");
    for p in &league.remaining {
        println!("  {}", p);
    }

    Ok(())
}

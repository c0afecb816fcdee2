//! The interactive seeding run.
//!
//! A run walks `Connected → UserVerified → TypesLoaded → Confirmed →
//! Inserting → Committed | RolledBack`. Any gate that fails before
//! `Inserting` ends the run without opening a transaction.

use std::io::{BufRead, Write};

use chrono::Utc;
use rand::Rng;

use olay_core::description::describe;
use olay_core::error::CoreError;
use olay_core::geo;
use olay_core::timestamps::random_past_timestamp;
use olay_core::types::DbId;
use olay_db::models::event::CreateEvent;
use olay_db::models::incident_type::IncidentType;
use olay_db::models::user::User;

use crate::console::Console;
use crate::error::SeedError;
use crate::store::EventStore;

/// Answer that confirms the insert ("evet"). Compared case-insensitively,
/// without trimming.
pub const CONFIRM_TOKEN: &str = "e";

/// A progress line is printed after every this many inserts.
pub const PROGRESS_EVERY: usize = 10;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// All rows inserted and committed.
    Committed { inserted: usize },
    /// An insert or the commit failed; nothing was kept.
    RolledBack { error: String },
    UserNotFound { id: DbId },
    NoIncidentTypes,
    /// A numeric answer did not parse.
    InvalidInput { input: String },
    /// The requested count was zero or negative.
    InvalidCount { count: i64 },
    Declined,
}

impl SeedOutcome {
    /// Rows that remain in the database after the run.
    pub fn rows_written(&self) -> usize {
        match self {
            Self::Committed { inserted } => *inserted,
            _ => 0,
        }
    }
}

/// Drive one seeding run against an already connected store.
///
/// Gate failures and insert failures are reported on the console and
/// returned as a [`SeedOutcome`]; `Err` is reserved for failed lookups,
/// a failed `BEGIN` or `ROLLBACK`, and console I/O errors.
pub async fn run<S, R, W, G>(
    store: &mut S,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<SeedOutcome, SeedError>
where
    S: EventStore,
    R: BufRead,
    W: Write,
    G: Rng,
{
    let user_id: DbId = match console.ask_number::<DbId>("\nUser ID: ") {
        Ok(id) => id,
        Err(SeedError::InvalidNumber(input)) => return invalid_input(console, input),
        Err(e) => return Err(e),
    };

    let Some(user) = store.find_active_user(user_id).await? else {
        let err = CoreError::NotFound {
            entity: "user",
            id: user_id,
        };
        tracing::info!(user_id, "User lookup failed");
        console.say(format!("{err}!"))?;
        return Ok(SeedOutcome::UserNotFound { id: user_id });
    };
    console.say(format!("User: {} ({})", user.username, user.role))?;

    let types = store.list_active_incident_types().await?;
    if types.is_empty() {
        let err = CoreError::Empty {
            entity: "incident types",
        };
        console.say(format!("{err}!"))?;
        return Ok(SeedOutcome::NoIncidentTypes);
    }
    console.say(format!("{} active incident types found", types.len()))?;
    tracing::debug!(user_id, type_count = types.len(), "Lookups complete");

    let requested: i64 = match console.ask_number::<i64>("How many events?: ") {
        Ok(n) => n,
        Err(SeedError::InvalidNumber(input)) => return invalid_input(console, input),
        Err(e) => return Err(e),
    };
    let count = match usize::try_from(requested) {
        Ok(n) if n > 0 => n,
        _ => {
            console.say("Invalid count!")?;
            return Ok(SeedOutcome::InvalidCount { count: requested });
        }
    };

    let answer = console.ask(&format!(
        "\nInsert {count} events for {}? (e/h): ",
        user.username
    ))?;
    if !answer.eq_ignore_ascii_case(CONFIRM_TOKEN) {
        console.say("Cancelled")?;
        return Ok(SeedOutcome::Declined);
    }

    console.say("\nInserting...")?;
    store.begin().await?;

    let result = match insert_events(store, console, rng, &user, &types, count).await {
        Ok(inserted) => store.commit().await.map(|()| inserted).map_err(SeedError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(inserted) => {
            tracing::info!(user_id, inserted, "Seeding committed");
            console.say(format!("\n{inserted} events inserted successfully!"))?;
            Ok(SeedOutcome::Committed { inserted })
        }
        Err(SeedError::Io(e)) => {
            tracing::error!(error = %e, "Console failed, rolling back");
            store.rollback().await?;
            Err(SeedError::Io(e))
        }
        Err(e) => {
            // Report the cause before ROLLBACK so a failing rollback can't hide it.
            tracing::error!(error = %e, "Seeding failed, rolling back");
            console.say(format!("Error: {e}"))?;
            store.rollback().await?;
            Ok(SeedOutcome::RolledBack {
                error: e.to_string(),
            })
        }
    }
}

fn invalid_input<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    input: String,
) -> Result<SeedOutcome, SeedError> {
    console.say("Invalid value!")?;
    Ok(SeedOutcome::InvalidInput { input })
}

/// Build one synthetic event for `user`, drawing everything else from `rng`.
///
/// `types` is never empty here: `run` stops at the incident-type gate first.
fn generate_event<G: Rng>(
    rng: &mut G,
    user: &User,
    types: &[IncidentType],
) -> CreateEvent {
    let incident = &types[rng.random_range(0..types.len())];
    let location = geo::random_point(rng);
    let created_at = random_past_timestamp(rng, Utc::now());

    CreateEvent {
        location,
        incident_type_id: incident.id,
        description: describe(&incident.name, incident.is_good),
        created_by_name: user.username.clone(),
        created_by_role_name: user.role.clone(),
        created_by_id: user.id,
        created_at,
    }
}

async fn insert_events<S, R, W, G>(
    store: &mut S,
    console: &mut Console<R, W>,
    rng: &mut G,
    user: &User,
    types: &[IncidentType],
    count: usize,
) -> Result<usize, SeedError>
where
    S: EventStore,
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut inserted = 0;
    for done in 1..=count {
        let event = generate_event(rng, user, types);
        store.insert_event(&event).await?;
        inserted += 1;

        if done % PROGRESS_EVERY == 0 || done == count {
            console.say(format!("  {done}/{count} inserted..."))?;
        }
    }
    Ok(inserted)
}

//! Command-line front end over the store and thunks.
//!
//! Each subcommand builds the same pipeline the web client would:
//! config → store (with persistence) → API client, then runs the
//! matching thunk and reads the result back out of the store. Failures
//! land on the app slice and become a nonzero exit.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{ApiClient, NewCard, NewPack};
use crate::auth;
use crate::cards::{self, CardsAction, CardsState};
use crate::config::Config;
use crate::domain::Pack;
use crate::packs::{self, PackOwnership, PacksAction, PacksState};
use crate::store::Store;

#[derive(Parser)]
#[command(name = "cardbox", version, about = "Client for the cardbox flashcards service")]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and print the resulting profile.
    Login {
        email: String,
        password: String,
        /// Ask the server for a long-lived session.
        #[arg(long)]
        remember: bool,
    },
    /// Show the profile behind the current session.
    Me,
    /// Drop the session.
    Logout,
    /// Pack operations.
    Packs {
        #[command(subcommand)]
        command: PacksCommand,
    },
    /// Card operations.
    Cards {
        #[command(subcommand)]
        command: CardsCommand,
    },
}

#[derive(Subcommand)]
pub enum PacksCommand {
    /// List packs.
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_count: Option<u32>,
        /// Only the signed-in user's packs.
        #[arg(long)]
        mine: bool,
    },
    /// Create a pack, then list the refreshed page.
    Add {
        name: String,
        #[arg(long)]
        private: bool,
    },
    /// Delete a pack by id.
    Delete { id: String },
    /// Rename a pack.
    Rename { id: String, name: String },
}

#[derive(Subcommand)]
pub enum CardsCommand {
    /// List a pack's cards.
    List {
        pack_id: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_count: Option<u32>,
    },
    /// Add a question/answer card to a pack.
    Add {
        pack_id: String,
        question: String,
        answer: String,
    },
    /// Delete a card by id.
    Delete { pack_id: String, id: String },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store = Store::with_persistence(config.state_path());
    let api = ApiClient::new(&config.api.base_url)?;

    match cli.command {
        Command::Login {
            email,
            password,
            remember,
        } => {
            auth::login(&api, &store, &email, &password, remember).await;
            bail_on_app_error(&store)?;
            if let Some(profile) = store.state().auth.profile {
                println!("signed in as {} <{}>", profile.name, profile.email);
            }
        }
        Command::Me => {
            auth::fetch_me(&api, &store).await;
            match store.state().auth.profile {
                Some(profile) => println!("{} <{}>", profile.name, profile.email),
                None => println!("not signed in"),
            }
        }
        Command::Logout => {
            auth::logout(&api, &store).await;
            bail_on_app_error(&store)?;
            println!("signed out");
        }
        Command::Packs { command } => run_packs(command, &api, &store).await?,
        Command::Cards { command } => run_cards(command, &api, &store).await?,
    }

    Ok(())
}

async fn run_packs(command: PacksCommand, api: &ApiClient, store: &Store) -> Result<()> {
    match command {
        PacksCommand::List {
            page,
            page_count,
            mine,
        } => {
            if let Some(page) = page {
                store.dispatch(PacksAction::SetPage(page));
            }
            if let Some(page_count) = page_count {
                store.dispatch(PacksAction::SetPageCount(page_count));
            }
            if mine {
                // The ownership filter needs the profile id.
                auth::fetch_me(api, store).await;
                store.dispatch(PacksAction::SetSortByAllMy(PackOwnership::My));
            }
            packs::fetch_packs(api, store).await;
            bail_on_app_error(store)?;
            print_packs(&store.state().packs);
        }
        PacksCommand::Add { name, private } => {
            let pack = NewPack {
                name,
                deck_cover: None,
                private: private.then_some(true),
            };
            packs::add_pack(api, store, &pack).await;
            bail_on_app_error(store)?;
            print_packs(&store.state().packs);
        }
        PacksCommand::Delete { id } => {
            packs::delete_pack(api, store, &id).await;
            bail_on_app_error(store)?;
            print_packs(&store.state().packs);
        }
        PacksCommand::Rename { id, name } => {
            let mut pack = Pack::with_id(id);
            pack.name = Some(name);
            packs::update_pack(api, store, &pack).await;
            bail_on_app_error(store)?;
            print_packs(&store.state().packs);
        }
    }

    Ok(())
}

async fn run_cards(command: CardsCommand, api: &ApiClient, store: &Store) -> Result<()> {
    match command {
        CardsCommand::List {
            pack_id,
            page,
            page_count,
        } => {
            if let Some(page) = page {
                store.dispatch(CardsAction::SetPage(page));
            }
            if let Some(page_count) = page_count {
                store.dispatch(CardsAction::SetPageCount(page_count));
            }
            cards::fetch_cards(api, store, &pack_id).await;
            bail_on_app_error(store)?;
            print_cards(&store.state().cards);
        }
        CardsCommand::Add {
            pack_id,
            question,
            answer,
        } => {
            let card = NewCard::text(pack_id, question, answer);
            cards::add_card(api, store, &card).await;
            bail_on_app_error(store)?;
            print_cards(&store.state().cards);
        }
        CardsCommand::Delete { pack_id, id } => {
            cards::delete_card(api, store, &pack_id, &id).await;
            bail_on_app_error(store)?;
            print_cards(&store.state().cards);
        }
    }

    Ok(())
}

/// Surface the app slice's error as a command failure.
fn bail_on_app_error(store: &Store) -> Result<()> {
    if let Some(error) = store.state().app.error {
        anyhow::bail!(error);
    }
    Ok(())
}

fn print_packs(state: &PacksState) {
    match &state.card_packs {
        Some(card_packs) if !card_packs.is_empty() => {
            for pack in card_packs {
                println!(
                    "{}  {:<32}  {:>4} cards  {}",
                    pack.id,
                    pack.name.as_deref().unwrap_or("(unnamed)"),
                    pack.cards_count.unwrap_or(0),
                    pack.user_name.as_deref().unwrap_or("")
                );
            }
            println!(
                "page {} ({} per page), {} packs total",
                state.page, state.page_count, state.card_packs_total_count
            );
        }
        _ => println!("no packs"),
    }
}

fn print_cards(state: &CardsState) {
    if state.cards.is_empty() {
        println!("no cards");
        return;
    }

    for card in &state.cards {
        println!(
            "{}  Q: {}  A: {}  (grade {:.1})",
            card.id,
            card.question.as_deref().unwrap_or(""),
            card.answer.as_deref().unwrap_or(""),
            card.grade.unwrap_or(0.0)
        );
    }
    println!(
        "page {} ({} per page), {} cards total",
        state.page, state.page_count, state.cards_total_count
    );
}

//! Application layer with dependency injection container.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │   App (DI container) -> Session      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - TextFileRepository                │   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  │  - ConsoleHuman / ConsoleObserver    │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - AvoidanceRepository, HumanPlayer, │   │
//! │  │    Observer, BoardAdapter            │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - AvoidanceStore, MoveSelector      │   │
//! │  │  - Board, Game, symmetry             │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use recall::adapters::{InMemoryRepository, ScriptedHuman};
//! use recall::app::App;
//! use recall::ports::SilentObserver;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_default_seed(42)
//!     .build();
//! let mut session = app.create_session(None);
//! let report = session.play_game(&mut ScriptedHuman::default(), &mut SilentObserver)?;
//! assert_eq!(report.plies.len(), 1);
//! # Ok::<(), recall::Error>(())
//! ```

pub mod config;
pub mod container;
pub mod session;

pub use config::RecallConfig;
pub use container::{App, AppBuilder};
pub use session::{GameReport, Session, SessionStats};

/*!
# Sheet CRUD Form

A minimal CRUD web form backed by a single three-column tabular row store,
served as one HTML page plus four fragment-returning request handlers.

## Overview

Each handler runs a linear validate → locate row → mutate → render sequence
against the shared sheet. Success and domain errors both come back as HTML
fragments; only the message wording tells them apart. Unexpected faults
(malformed JSON payloads, store I/O failures) surface as HTTP errors instead.

## Architecture

- **Row Store** (`store`): ordered rows of strings keyed by field A, located
  by linear scan. Persisted as a gzip-compressed binary file, loaded once at
  startup and held behind the app state mutex.
- **CRUD Handlers** (`handlers`): insert / select / update / delete over an
  injected `RowStore`, returning tagged outcomes rather than markup.
- **HTML Renderer** (`render`): pure fragment builder; the fixed-header
  (A, B, C) row table, with every field value escaped.
- **Page Bootstrap** (`page`): handlebars templates; the root page resolves
  fragment includes as partials, and fragments are also served raw.
- **Router** (`app`): axum routes wiring the above together, plus a static
  file directory.

## REST API Endpoints

- `GET /` - Rendered root page
- `GET /fragment/:name` - Raw fragment text
- `POST /api/insert`, `POST /api/update` - Body is a JSON string array
- `POST /api/select`, `POST /api/delete` - Body is the key (field A)
- `GET /static/{path}` - Stylesheet and client script

## Known quirks

Kept from the observed behavior of the sheet this replaces: insert's
uniqueness pre-check matches substrings of field A while update/delete match
whole cells, update locates its target by the *new* key (renames report
not-found), and payload arity is never validated. Check-then-act sequences
are not protected against concurrent requests beyond the state mutex.
*/

pub mod app;
pub mod config;
pub mod handlers;
pub mod page;
pub mod render;
pub mod saving;
pub mod store;

pub use config::Config;
pub use handlers::{CrudError, CrudOutcome};
pub use store::{Row, RowStore, SheetStore};

//! # TUI Components
//!
//! Every widget the portfolio draws.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display-only pieces that receive all data as parameters:
//! - `sections`: styled text for each page section
//! - `Backdrop`: the drifting colour orbs behind the page
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose state lives in `TuiState` between frames, wrapped by a
//! transient struct each frame:
//! - `Page` / `PageState`: the scrolling page, section jumps
//! - `NavBar` / `NavBarState`: header links and their hit-test rects
//! - `ContactFormEditor` / `ContactFormView` / `ContactFormState`: the form
//! - `NotificationOverlay` / `NotificationOverlayState`: outcome panel
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into
//! `App`:
//!
//! ```rust,ignore
//! NavBar::new(&mut tui.nav_bar, &app.profile.name, tui.page.active_section())
//!     .render(frame, nav_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── backdrop.rs      (Pointer-following orbs)
//! ├── nav_bar.rs       (Sticky header)
//! ├── notification.rs  (Submission outcome overlay)
//! ├── page.rs          (Scrolling page container)
//! ├── contact_form/    (Name / email / message editor)
//! └── sections/        (Hero, About, Education, ... Footer)
//! ```

pub mod backdrop;
pub mod contact_form;
pub mod nav_bar;
pub mod notification;
pub mod page;
pub mod sections;

pub use backdrop::{Backdrop, BackdropState};
pub use contact_form::{ContactFormEditor, ContactFormState, Focus, FormEvent};
pub use nav_bar::{NavBar, NavBarState};
pub use notification::{NotificationOverlay, NotificationOverlayState, OverlayEvent};
pub use page::{Page, PageState};

//! Navigation controller - drives the session state machine
//!
//! All transitions are invoked synchronously by host-delivered events
//! (panel opened, text changed, selection made, focus changed). The
//! one reentrancy hazard is a programmatic reopen: hiding the old
//! panel makes the host deliver a dismissal event, which must not
//! close the session. The `reload_requested` flag is set before every
//! reopen and consumed exactly once by that dismissal.

use std::path::{Path, PathBuf};

use crate::action;
use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::host::{Host, WindowId};
use crate::listing::{self, Entry, ExclusionPolicy};
use crate::nav::input::{interpret, TextIntent};
use crate::nav::session::Session;
use crate::platform::{self, RootKind};

/// Parameters for opening a navigation session
#[derive(Debug, Clone)]
pub struct OpenRequest {
    /// Starting directory; the platform root when absent or unusable
    pub start: Option<PathBuf>,
    /// Apply the configured exclusion patterns
    pub exclude: bool,
    /// Text already sitting in the panel's text box
    pub initial_text: String,
    /// Window the session belongs to
    pub window: WindowId,
}

impl Default for OpenRequest {
    fn default() -> Self {
        Self {
            start: None,
            exclude: true,
            initial_text: String::new(),
            window: 0,
        }
    }
}

impl OpenRequest {
    /// Open at `start` with the default exclusion policy
    pub fn at(start: impl Into<PathBuf>, window: WindowId) -> Self {
        Self {
            start: Some(start.into()),
            window,
            ..Self::default()
        }
    }
}

/// Drives the single navigation session over host-delivered events
///
/// Owns the only [`Session`] slot, so a second concurrently-active
/// session cannot exist by construction.
#[derive(Debug)]
pub struct Navigator {
    root: RootKind,
    default_policy: ExclusionPolicy,
    show_hidden_default: bool,
    home: PathBuf,
    session: Option<Session>,
}

impl Navigator {
    /// Build a navigator from settings
    ///
    /// Exclusion patterns are compiled here, so a malformed pattern is
    /// rejected before any session exists.
    pub fn new(config: &NavConfig) -> Result<Self> {
        Self::with_root(config, RootKind::detect())
    }

    /// Build with an explicit root model
    pub fn with_root(config: &NavConfig, root: RootKind) -> Result<Self> {
        let default_policy = ExclusionPolicy::new(&config.regex_exclude)?;
        let home = config
            .home
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| root.sentinel());
        Ok(Self {
            root,
            default_policy,
            show_hidden_default: config.show_hidden,
            home,
            session: None,
        })
    }

    /// Whether a session is live
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The root model this navigator was built with
    pub fn root(&self) -> RootKind {
        self.root
    }

    /// Transition 1: open (or reopen) the navigation panel
    pub fn open<H: Host>(&mut self, host: &mut H, request: OpenRequest) {
        // A dismissal event from this hide may still be in flight; its
        // reload flag has to survive into the new session
        let reload_requested = match self.session.take() {
            Some(old) => {
                host.hide_panel();
                old.reload_requested
            }
            None => false,
        };

        let cwd = platform::resolve(request.start.as_deref(), self.root);
        let policy = if request.exclude && !self.show_hidden_default {
            self.default_policy.clone()
        } else {
            ExclusionPolicy::empty()
        };
        self.session = Some(Session {
            cwd,
            policy,
            pending: request.initial_text,
            reload_requested,
            listing: Vec::new(),
            owner_window: request.window,
        });

        if let Err(err) = self.refresh(host) {
            self.session = None;
            host.report_error(&err.to_string());
        }
    }

    /// Transition 2: the panel text box content changed
    pub fn text_changed<H: Host>(&mut self, host: &mut H, new_text: &str) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.pending == new_text {
            return;
        }
        let cwd = session.cwd.clone();

        match interpret(new_text) {
            TextIntent::GoHome => {
                let home = self.home.clone();
                self.reopen(host, home, String::new());
            }
            TextIntent::GoRoot => {
                let sentinel = self.root.sentinel();
                self.reopen(host, sentinel, String::new());
            }
            TextIntent::Descend(relative) => {
                self.reopen(host, cwd.join(relative), String::new());
            }
            TextIntent::Filter(text) => {
                self.reopen(host, cwd, text);
            }
        }
    }

    /// Transition 3: a panel row was chosen (`Some(index)`) or the
    /// panel was dismissed (`None`)
    pub fn select<H: Host>(&mut self, host: &mut H, choice: Option<usize>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let Some(index) = choice else {
            if session.reload_requested {
                // The dismissal came from our own reopen, not the user
                session.reload_requested = false;
            } else {
                self.session = None;
            }
            return;
        };

        session.reload_requested = false;
        let Some(entry) = session.listing.get(index).cloned() else {
            return;
        };
        let cwd = session.cwd.clone();

        match entry {
            Entry::Parent => {
                let parent = platform::parent_of(&cwd, self.root);
                self.visit(host, parent);
            }
            Entry::Folder(name) | Entry::File(name) => {
                self.visit(host, cwd.join(name));
            }
            Entry::CreateFile(text) => {
                self.create_named_file(host, &cwd, &text);
            }
            Entry::CreateFolder(text) => {
                self.create_named_folder(host, &cwd, &text);
            }
        }
    }

    /// Transition 5: window focus moved; sessions are single-window
    pub fn focus_changed(&mut self, window: WindowId) {
        if let Some(session) = &self.session {
            if session.owner_window != window {
                self.session = None;
            }
        }
    }

    /// Explicitly cancel the live session, if any
    pub fn close<H: Host>(&mut self, host: &mut H) {
        if self.session.take().is_some() {
            host.hide_panel();
        }
    }

    /// Transition 4: create an empty file at `dir/name` and open it
    ///
    /// Also the confirm handler for [`prompt_create_file`]. Failure is
    /// reported and leaves the session untouched.
    ///
    /// [`prompt_create_file`]: Navigator::prompt_create_file
    pub fn create_named_file<H: Host>(&mut self, host: &mut H, dir: &Path, name: &str) {
        match action::create_file(dir, name) {
            Ok(path) => {
                host.open_file(&path);
                self.session = None;
            }
            Err(_) => {
                host.report_error(&NavError::create(dir.join(name)).to_string());
            }
        }
    }

    /// Transition 4: create a folder at `dir/name`, intermediate
    /// segments included
    ///
    /// Also the confirm handler for [`prompt_create_folder`].
    ///
    /// [`prompt_create_folder`]: Navigator::prompt_create_folder
    pub fn create_named_folder<H: Host>(&mut self, host: &mut H, dir: &Path, name: &str) {
        match action::create_folder(dir, name) {
            Ok(_) => {
                if let Some(session) = self.session.as_mut() {
                    session.pending.clear();
                }
                if let Err(err) = self.refresh(host) {
                    self.session = None;
                    host.report_error(&err.to_string());
                }
            }
            Err(_) => {
                host.report_error(&NavError::create(dir.join(name)).to_string());
            }
        }
    }

    /// Ask the host for a file name to create (direct command flow)
    pub fn prompt_create_file<H: Host>(&self, host: &mut H) {
        host.show_input_box("Create File:", "");
    }

    /// Ask the host for a folder name to create (direct command flow)
    pub fn prompt_create_folder<H: Host>(&self, host: &mut H) {
        host.show_input_box("Make Directory:", "");
    }

    /// Reopen the current directory with hidden files visible and the
    /// text box seeded with `.`
    pub fn show_hidden<H: Host>(&mut self, host: &mut H) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.policy = ExclusionPolicy::empty();
        let cwd = session.cwd.clone();
        self.reopen(host, cwd, ".".to_string());
    }

    /// Open a session rooted at the directory containing `file`
    pub fn open_from_file<H: Host>(
        &mut self,
        host: &mut H,
        file: &Path,
        exclude: bool,
        window: WindowId,
    ) {
        if !file.is_file() {
            return;
        }
        let start = file.parent().map(Path::to_path_buf);
        self.open(
            host,
            OpenRequest {
                start,
                exclude,
                window,
                ..OpenRequest::default()
            },
        );
    }

    /// Redisplay the panel at `start`, keeping policy and window
    ///
    /// Hiding the old panel triggers a synthetic dismissal from the
    /// host; `reload_requested` is set first so transition 3 swallows
    /// it.
    fn reopen<H: Host>(&mut self, host: &mut H, start: PathBuf, pending: String) {
        let root = self.root;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.reload_requested = true;
        host.hide_panel();
        session.cwd = platform::resolve(Some(&start), root);
        session.pending = pending;

        if let Err(err) = self.refresh(host) {
            self.session = None;
            host.report_error(&err.to_string());
        }
    }

    /// Enter `path` if it is a directory, re-listing it; otherwise
    /// open it in the editor and end the session
    fn visit<H: Host>(&mut self, host: &mut H, path: PathBuf) {
        if self.root.is_sentinel(&path) || path.is_dir() {
            self.enter_directory(host, path);
        } else {
            host.open_file(&path);
            self.session = None;
        }
    }

    fn enter_directory<H: Host>(&mut self, host: &mut H, path: PathBuf) {
        let root = self.root;
        if let Some(session) = self.session.as_mut() {
            session.cwd = path;
            session.pending.clear();
        }
        if let Err(err) = self.refresh(host) {
            // Inaccessible directory: back up one level and retry
            host.report_error(&err.to_string());
            if let Some(session) = self.session.as_mut() {
                session.cwd = platform::parent_of(&session.cwd, root);
            }
            if let Err(err) = self.refresh(host) {
                self.session = None;
                host.report_error(&err.to_string());
            }
        }
    }

    /// Re-list the session's directory and hand the rows to the host
    ///
    /// The create offer is appended when the pending text names a
    /// child that does not exist yet.
    fn refresh<H: Host>(&mut self, host: &mut H) -> Result<()> {
        let root = self.root;
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let mut entries = listing::list(&session.cwd, &session.policy, root)?;
        if !session.pending.is_empty() && !session.cwd.join(&session.pending).exists() {
            entries.push(Entry::CreateFile(session.pending.clone()));
            entries.push(Entry::CreateFolder(session.pending.clone()));
        }

        let labels: Vec<String> = entries.iter().map(Entry::label).collect();
        session.listing = entries;
        host.show_panel(labels);
        Ok(())
    }
}

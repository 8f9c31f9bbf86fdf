//! Screen navigation.
//!
//! A single current screen, replaced unconditionally on every navigation.
//! There is deliberately no history stack: each screen names the screen its
//! own back action leads to, with reconstructed parameters. The `Screen`
//! enum is the closed set of destinations; every variant carries its own
//! typed parameters and the view layer matches it exhaustively.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    ClientList,
    ClientForm { client_id: Option<String> },
    ClientDetail { client_id: String },
    TestSelection { client_id: String },
    TestRunner { client_id: String, test_id: String },
    ResultView { result_id: String },
    ReportBuilder { client_id: String },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::ClientList
    }
}

/// Pages reachable from the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AnomalousRecord,
    DangerousRecord,
    Report,
}

impl Route {
    /// Navigation bar entries, left to right
    pub const NAV: [Route; 4] = [
        Route::Home,
        Route::AnomalousRecord,
        Route::DangerousRecord,
        Route::Report,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AnomalousRecord => "/anomalous_record",
            Route::DangerousRecord => "/dangerous_record",
            Route::Report => "/report",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "홈",
            Route::AnomalousRecord => "이상행동 기록",
            Route::DangerousRecord => "위험행동 기록",
            Route::Report => "신고",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::AnomalousRecord => "?",
            Route::DangerousRecord => "▲",
            Route::Report => "🔔",
        }
    }
}

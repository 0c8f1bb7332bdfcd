//! The `/ukelonn/...` paths the screens live under, and the location the
//! store keeps for the currently shown one.

use strum_macros::EnumIter;

const PARENT_TITLE: &str = "parentTitle";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum Route {
    Home,
    Login,
    User,
    PerformedJobs,
    PerformedPayments,
    Statistics,
    Admin,
    AdminJobtypes,
    AdminJobtypesModify,
    AdminJobtypesCreate,
    AdminJobsDelete,
    AdminJobsEdit,
    AdminPaymenttypes,
    AdminPaymenttypesModify,
    AdminPaymenttypesCreate,
    AdminUsers,
    AdminUsersModify,
    AdminUsersCreate,
    AdminUsersPassword,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/ukelonn/",
            Route::Login => "/ukelonn/login",
            Route::User => "/ukelonn/user",
            Route::PerformedJobs => "/ukelonn/performedjobs",
            Route::PerformedPayments => "/ukelonn/performedpayments",
            Route::Statistics => "/ukelonn/statistics",
            Route::Admin => "/ukelonn/admin",
            Route::AdminJobtypes => "/ukelonn/admin/jobtypes",
            Route::AdminJobtypesModify => "/ukelonn/admin/jobtypes/modify",
            Route::AdminJobtypesCreate => "/ukelonn/admin/jobtypes/create",
            Route::AdminJobsDelete => "/ukelonn/admin/jobs/delete",
            Route::AdminJobsEdit => "/ukelonn/admin/jobs/edit",
            Route::AdminPaymenttypes => "/ukelonn/admin/paymenttypes",
            Route::AdminPaymenttypesModify => "/ukelonn/admin/paymenttypes/modify",
            Route::AdminPaymenttypesCreate => "/ukelonn/admin/paymenttypes/create",
            Route::AdminUsers => "/ukelonn/admin/users",
            Route::AdminUsersModify => "/ukelonn/admin/users/modify",
            Route::AdminUsersCreate => "/ukelonn/admin/users/create",
            Route::AdminUsersPassword => "/ukelonn/admin/users/password",
        }
    }

    /// Resolve a pathname, unknown paths end up at `Home`
    pub fn from_path(pathname: &str) -> Route {
        use strum::IntoEnumIterator;
        let trimmed = pathname.trim_end_matches('/');
        Route::iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .unwrap_or(Route::Home)
    }

    /// Everything but the login screen requires a logged in user
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// A link to this route that shows `title` in the target's back button
    pub fn with_parent_title(&self, title: &str) -> String {
        format!(
            "{}?{PARENT_TITLE}={}",
            self.path(),
            urlencoding::encode(title)
        )
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Location {
    pub pathname: String,
    /// The query string, including the leading `?` when present
    pub search: String,
}

impl Default for Location {
    fn default() -> Self {
        Location::new(Route::Home.path())
    }
}

impl Location {
    pub fn new(url: &str) -> Self {
        match url.split_once('?') {
            Some((pathname, query)) => Self {
                pathname: pathname.to_string(),
                search: format!("?{query}"),
            },
            None => Self {
                pathname: url.to_string(),
                search: String::new(),
            },
        }
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.pathname)
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.search.strip_prefix('?').unwrap_or(&self.search);
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// The breadcrumb of the screen that linked here, blank when missing
    pub fn parent_title(&self) -> String {
        self.query_param(PARENT_TITLE).unwrap_or_default()
    }
}

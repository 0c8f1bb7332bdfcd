use crate::environment::types::*;

/// Everything that can happen to the store. `…Request` variants are the
/// triggers the sagas wait for, `…Received` variants carry their results.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Sent once by the root view store, forks the sagas
    Startup,

    InitialLoginStateRequest,
    InitialLoginStateReceived(Result<LoginResult, String>),
    LoginRequest(LoginCredentials),
    LoginReceived(Result<LoginResult, String>),
    LogoutRequest,
    LogoutReceived(Result<LoginResult, String>),

    /// Show the screen for a path, optionally with a query string
    Navigate(String),

    AccountRequest(String),
    AccountReceived(Result<Account, String>),
    AccountsRequest,
    AccountsReceived(Result<Vec<Account>, String>),
    /// An admin picked one of `accounts` to work on
    SelectAccount(Account),

    JobtypeListRequest,
    JobtypeListReceived(Result<Vec<TransactionType>, String>),
    CreateJobtypeRequest(TransactionType),
    CreateJobtypeReceived(Result<Vec<TransactionType>, String>),
    ModifyJobtypeRequest(TransactionType),
    ModifyJobtypeReceived(Result<Vec<TransactionType>, String>),

    RegisterJobRequest(PerformedTransaction),
    RegisterJobReceived(Result<Account, String>),
    RecentJobsRequest(AccountId),
    RecentJobsReceived(Result<Vec<Transaction>, String>),
    DeleteJobsRequest(AccountWithJobIds),
    DeleteJobsReceived(Result<Vec<Transaction>, String>),
    UpdateJobRequest(UpdatedTransaction),
    UpdateJobReceived(Result<Vec<Transaction>, String>),

    PaymenttypesRequest,
    PaymenttypesReceived(Result<Vec<TransactionType>, String>),
    CreatePaymenttypeRequest(TransactionType),
    CreatePaymenttypeReceived(Result<Vec<TransactionType>, String>),
    ModifyPaymenttypeRequest(TransactionType),
    ModifyPaymenttypeReceived(Result<Vec<TransactionType>, String>),

    RegisterPaymentRequest(PerformedTransaction),
    RegisterPaymentReceived(Result<Account, String>),
    RecentPaymentsRequest(AccountId),
    RecentPaymentsReceived(Result<Vec<Transaction>, String>),

    UsersRequest,
    UsersReceived(Result<Vec<User>, String>),
    CreateUserRequest(PasswordsWithUser),
    CreateUserReceived(Result<Vec<User>, String>),
    ModifyUserRequest(User),
    ModifyUserReceived(Result<Vec<User>, String>),
    ChangePasswordRequest(PasswordsWithUser),
    ChangePasswordReceived(Result<Vec<User>, String>),

    /// Start polling notifications for a username
    StartNotificationListening(String),
    NotificationReceived(Notification),
    ClearNotification,

    EarningsSumOverYearRequest(String),
    EarningsSumOverYearReceived(Result<Vec<SumYear>, String>),
    EarningsSumOverMonthRequest(String),
    EarningsSumOverMonthReceived(Result<Vec<SumYearMonth>, String>),

    ClearError,
}

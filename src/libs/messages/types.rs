#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleHabitica,
    CredentialsNotConfigured,
    PromptSelectModules,

    // === REMOTE SERVICE MESSAGES ===
    ServiceHttpStatus(String),
    ServiceRequestRejected,

    // === SYNC MESSAGES ===
    SyncFetching(String), // api url
    TagsFetched(usize),
    TagsFetchFailed(String),
    TasksFetched(usize),
    TaskProcessFailed(String, String), // task name, error
    HistoryDateSkipped(String, String), // task name, raw date
    SyncComplete,
    SyncSummaryHeader,
    StoredTotalsHeader,

    // === SHOW MESSAGES ===
    ShowTasksHeader,
    ShowTagsHeader,
    ShowHistoryHeader(String), // task name
    ShowChecklistHeader,
    TaskNotFound(String),
    NoTasksStored,
    NoTagsStored,
    NoHistoryStored(String), // task name

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data type, format
    ExportingAllData,
    ExportCompleted(String), // output path

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}

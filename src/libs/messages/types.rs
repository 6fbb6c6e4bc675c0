#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded,
    TaskUpdated,
    TaskDeleted,
    TaskNotFoundWithId(i32),
    NoTasksFound,
    NoResultsFound,
    InvalidStatus(String),
    TaskNameRequired,
    CustomTagRequired,
    TaskListHeader,
    SearchResultsHeader,
    TaskDetailsHeader(i32),
    ConfirmDeleteAllTasks,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskInfo,
    PromptDueDate,
    PromptStatus,
    PromptPriority,
    PromptChooseTag,
    PromptCustomTag,
    PromptTaskId,
    PromptUpdateField,
    PromptNewStatus,
    PromptNewPriority,
    PromptNewInformation,
    PromptSearchBy,
    PromptSearchStatus,
    PromptSearchTag,
    PromptSearchId,
    PromptDeleteMode,
    PromptDeleteId,
    PromptTagPresets,
}

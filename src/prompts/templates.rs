//! The shipped prompt set
//!
//! Plan-and-solve prompting: a run starts by expanding the goal into a short
//! task list, then loops analyze -> execute -> create until the list drains.

use super::PromptTemplate;

/// System half of the initial task-creation call
pub const START_GOAL_SYSTEM_PROMPT: PromptTemplate = PromptTemplate::new(
    "I am a task creation AI called AgentRWKV. my answer in the \"{language}\" language. \
     I am not a part of any system or device. I first understand the problem, extract \
     relevant variables, and make and devise a complete plan.",
    &["language"],
);

/// User half of the initial task-creation call
pub const START_GOAL_PROMPT: PromptTemplate = PromptTemplate::new(
    "You have the following objective \"{goal}\". Create a list of 4 step actions to \
     accomplish the goal. Use at most 4 steps.\nlist:1.",
    &["goal"],
);

/// Pick the function that makes the most progress on the current task
pub const ANALYZE_TASK_PROMPT: PromptTemplate = PromptTemplate::new(
    "High level objective: \"{goal}\"\n\
     Current task: \"{task}\"\n\
     Function: [Reason, Conclude, Search, Code]\n\n\
     Based on this information, use the best function to make progress or accomplish \
     the task entirely. Select the correct function by being smart and efficient.\n\n\
     Note you MUST select a function from list [Reason, Conclude, Search, Code]",
    &["goal", "task"],
);

/// Code-writing variant of task execution
pub const CODE_PROMPT: PromptTemplate = PromptTemplate::new(
    "You are a world-class software engineer and an expert in all programing languages, \
     software systems, and architecture.\n\n\
     For reference, your high level goal is {goal}\n\n\
     Write code in English but explanations/comments in the \"{language}\" language.\n\n\
     Provide no information about who you are and focus on writing code. \
     Ensure code is bug and error free and explain complex concepts through comments. \
     Respond in well-formatted markdown. Ensure code blocks are used for code sections. \
     Approach problems step by step and file by file, for each section, use a heading \
     to describe the section.\n\n\
     Write code to accomplish the following:\n{task}",
    &["goal", "language", "task"],
);

/// Execute a single sub-task of the overall objective
pub const EXECUTE_TASK_PROMPT: PromptTemplate = PromptTemplate::new(
    "Answer in the \"{language}\" language. Given the following overall objective \
     `{goal}` and the following sub-task, `{task}`.\n\n\
     Perform the task by understanding the problem, extracting variables, and being \
     smart and efficient. Write a detailed response that address the task. \
     When confronted with choices, make a decision yourself with reasoning.",
    &["goal", "language", "task"],
);

/// System half of the follow-up task-creation call
pub const CREATE_TASKS_SYSTEM_PROMPT: PromptTemplate = PromptTemplate::new(
    "I am an AI task creation agent. I must answer in the \"{language}\" language.",
    &["language"],
);

/// Create at most one new task from the last result
///
/// Declares `language` like its system half even though only the system
/// half interpolates it.
pub const CREATE_TASKS_PROMPT: PromptTemplate = PromptTemplate::new(
    "You have the following objective `{goal}`. You have the following incomplete \
     tasks `{tasks}` and have just executed the following task `{lastTask}` and \
     received the following result `{result}`.\n\n\
     Based on this, create a single new task to be completed by your AI system such \
     that your goal is more closely reached or completely reached. Make the task as \
     specific as possible and ensure it is a single task. If there are no more tasks \
     to be done, return nothing. Do not add quotes to the task.",
    &["goal", "language", "tasks", "lastTask", "result"],
);

/// Summarize search snippets with inline citations
pub const SUMMARIZE_PROMPT: PromptTemplate = PromptTemplate::new(
    "You must answer in the \"{language}\" language.\n\n\
     Parse and summarize the following text snippets \"{snippets}\". \
     Write using clear markdown formatting in a style expected of the goal \"{goal}\". \
     Be as clear, informative, and descriptive as necessary and attempt to answer the \
     query: \"{query}\" as best as possible.\n\n\
     Cite sources for as many sentences as possible via the source link. Use the index \
     as the citation text. Site the source using a markdown link directly at the end of \
     the sentence that the source is used in. Do not list sources at the end of the \
     writing.",
    &["goal", "language", "query", "snippets"],
);

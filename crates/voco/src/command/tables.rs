use std::collections::HashMap;

/// Spoken phrases that map straight to editor command ids.
///
/// The key is the exact normalized occurrence needed to trigger the
/// command. Several entries carry alternate spellings because
/// recognizers split compound words inconsistently ("break point",
/// "re open editor").
pub const BUILTIN_COMMANDS: &[(&str, &str)] = &[
    ("break point", "editor.debug.action.toggleBreakpoint"),
    ("breakpoint", "editor.debug.action.toggleBreakpoint"),
    ("close editor", "workbench.action.closeActiveEditor"),
    ("close terminal", "workbench.action.terminal.toggleTerminal"),
    ("comment", "editor.action.commentLine"),
    ("continue", "workbench.action.debug.continue"),
    ("copy", "editor.action.clipboardCopyAction"),
    ("cursor left", "cursorWordLeft"),
    ("cursor right", "cursorWordRight"),
    ("cut", "editor.action.clipboardCutAction"),
    ("delete line", "editor.action.deleteLines"),
    ("format document", "editor.action.formatDocument"),
    ("go backward", "workbench.action.navigateBack"),
    ("go forward", "workbench.action.navigateForward"),
    ("go to definition", "editor.action.revealDefinition"),
    ("hover", "editor.action.showHover"),
    ("indent", "editor.action.indentLines"),
    ("move line up", "editor.action.moveLinesUpAction"),
    ("move line down", "editor.action.moveLinesDownAction"),
    ("redo", "redo"),
    ("remove indent", "editor.action.outdentLines"),
    ("reopen editor", "workbench.action.reopenClosedEditor"),
    ("re open editor", "workbench.action.reopenClosedEditor"),
    ("restart", "workbench.action.debug.restart"),
    ("open terminal", "workbench.action.terminal.focus"),
    ("paste", "editor.action.clipboardPasteAction"),
    ("start debugging", "workbench.action.debug.start"),
    ("show explorer", "workbench.view.explorer"),
    ("step in to", "workbench.action.debug.stepInto"),
    ("step into", "workbench.action.debug.stepInto"),
    ("step out", "workbench.action.debug.stepOut"),
    ("step over", "workbench.action.debug.stepOver"),
    ("stop debugging", "workbench.action.debug.stop"),
    ("toggle dev panel", "workbench.action.toggleDevTools"),
    ("toggle dev tools", "workbench.action.toggleDevTools"),
    ("toggle developer panel", "workbench.action.toggleDevTools"),
    ("toggle developer tools", "workbench.action.toggleDevTools"),
    // Panel containing the terminal and output views
    ("toggle panel", "workbench.action.togglePanel"),
    ("toggle side bar", "workbench.action.toggleSidebarVisibility"),
    ("toggle sidebar", "workbench.action.toggleSidebarVisibility"),
    ("undo", "undo"),
];

/// Engine-side effect triggered by a spoken phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAction {
    DeleteCurrentFile,
    InsertNewLine,
    RemoveAllBreakpoints,
    RunCurrentFile,
    SaveCurrentFile,
}

/// Spoken phrases that run an engine-side action instead of a single
/// editor command. These keys must stay disjoint from
/// [`BUILTIN_COMMANDS`]; command lookup wins on overlap.
pub const BUILTIN_FUNCTIONS: &[(&str, BuiltinAction)] = &[
    ("delete current file", BuiltinAction::DeleteCurrentFile),
    ("new line", BuiltinAction::InsertNewLine),
    ("remove all breakpoints", BuiltinAction::RemoveAllBreakpoints),
    ("remove all break points", BuiltinAction::RemoveAllBreakpoints),
    ("run code", BuiltinAction::RunCurrentFile),
    ("save", BuiltinAction::SaveCurrentFile),
];

/// What a phrase resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// An editor command id to hand to the host verbatim.
    Command(&'a str),
    /// A built-in action the engine performs itself.
    Builtin(BuiltinAction),
}

/// Lookup tables from normalized phrases to their targets.
///
/// Built once and handed to the engine; nothing in here is global, so
/// hosts can swap in their own tables.
#[derive(Debug, Clone)]
pub struct CommandTables {
    commands: HashMap<String, String>,
    functions: HashMap<String, BuiltinAction>,
}

impl CommandTables {
    /// Builds tables from explicit phrase maps.
    pub fn new(
        commands: HashMap<String, String>,
        functions: HashMap<String, BuiltinAction>,
    ) -> Self {
        Self {
            commands,
            functions,
        }
    }

    /// Builds the stock tables.
    pub fn builtin() -> Self {
        let commands = BUILTIN_COMMANDS
            .iter()
            .map(|(phrase, id)| (phrase.to_string(), id.to_string()))
            .collect();
        let functions = BUILTIN_FUNCTIONS
            .iter()
            .map(|(phrase, action)| (phrase.to_string(), *action))
            .collect();
        Self::new(commands, functions)
    }

    /// Resolves a normalized phrase, checking the command table first.
    pub fn resolve(&self, phrase: &str) -> Option<Resolved<'_>> {
        if let Some(id) = self.commands.get(phrase) {
            return Some(Resolved::Command(id));
        }
        self.functions.get(phrase).copied().map(Resolved::Builtin)
    }

    /// Looks up a phrase in the command table only.
    pub fn command(&self, phrase: &str) -> Option<&str> {
        self.commands.get(phrase).map(String::as_str)
    }
}

impl Default for CommandTables {
    fn default() -> Self {
        Self::builtin()
    }
}

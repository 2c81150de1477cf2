use crate::cli::{AddArgs, EditArgs, Intent};
use anyhow::{anyhow, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};
use taskboard_core::AppConfig;
use taskboard_domain::{BoardEngine, BoardView, Priority, TaskId, TaskUpdate, Template};
use taskboard_persistence::{BoardStore, FileStore};

/// Response body of every successful intent.
#[derive(Serialize)]
pub struct IntentReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(flatten)]
    pub view: BoardView<'a>,
}

pub struct CliContext {
    engine: BoardEngine,
    data_dir: PathBuf,
}

impl CliContext {
    /// Open the stored board, applying command-line overrides over the config file.
    pub fn load(data_dir: Option<PathBuf>, template: Option<Template>) -> anyhow::Result<Self> {
        let config = AppConfig::load();
        let template = match template {
            Some(template) => template,
            None => config.effective_default_template().parse()?,
        };
        let data_dir = data_dir.unwrap_or_else(|| config.effective_data_dir());
        tracing::debug!("Using data directory {}", data_dir.display());

        let store = BoardStore::with_key(FileStore::new(&data_dir), config.effective_storage_key());
        Ok(Self {
            engine: BoardEngine::with_persistence(template, Box::new(store)),
            data_dir,
        })
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut BoardEngine {
        &mut self.engine
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn report(&self, task_id: Option<TaskId>) -> IntentReport<'_> {
        IntentReport {
            task_id,
            view: self.engine.view(),
        }
    }

    /// Apply one intent. A declined intent is an error naming why.
    pub fn run(&mut self, intent: Intent) -> anyhow::Result<Option<TaskId>> {
        match intent {
            Intent::Show => Ok(None),
            Intent::Add(args) => self.add(args).map(Some),
            Intent::Edit(args) => self.edit(args).map(|()| None),
            Intent::Delete { column, id } => {
                if !self.engine.delete_task(&column, &id) {
                    bail!("Task not found: {} in column {}", id, column);
                }
                Ok(None)
            }
            Intent::Move {
                from,
                to,
                from_index,
                to_index,
            } => {
                if !self.engine.move_task(&from, &to, from_index, to_index) {
                    bail!("Nothing to move at {}[{}]", from, from_index);
                }
                Ok(None)
            }
            Intent::Reset => {
                self.engine.reset();
                Ok(None)
            }
            Intent::Clear { yes } => self.clear(yes).map(|()| None),
            Intent::Template { name } => {
                if !self.engine.select_template(name) {
                    bail!("Template {} is already active", name);
                }
                Ok(None)
            }
        }
    }

    /// Reset after confirmation.
    pub fn clear(&mut self, confirmed: bool) -> anyhow::Result<()> {
        if !self.engine.clear(|| confirmed) {
            bail!("Clearing the board needs confirmation (pass --yes)");
        }
        Ok(())
    }

    fn add(&mut self, args: AddArgs) -> anyhow::Result<TaskId> {
        let priority = parse_priority(&args.priority);
        self.engine
            .add_task(&args.column, &args.title, &args.description, priority)
            .ok_or_else(|| anyhow!("Task title must not be blank"))
    }

    fn edit(&mut self, args: EditArgs) -> anyhow::Result<()> {
        let update = build_task_update(&args);
        if update.is_empty() {
            bail!("Nothing to edit: pass --title, --description, --priority, --tag or --clear-tags");
        }
        if !update.is_valid() {
            bail!("Task title must not be blank");
        }
        if self.engine.board().find_task(&args.id).is_none() {
            bail!("Task not found: {}", args.id);
        }
        if !self.engine.update_task(&args.column, &args.id, update) {
            bail!("Task {} is not in column {}", args.id, args.column);
        }
        Ok(())
    }
}

/// Unknown priorities are kept verbatim.
fn parse_priority(raw: &str) -> Priority {
    let priority = Priority::from(raw);
    if !priority.is_known() {
        tracing::info!("Keeping unrecognized priority '{}'", raw);
    }
    priority
}

fn build_task_update(args: &EditArgs) -> TaskUpdate {
    let mut update = TaskUpdate::new();
    if let Some(title) = &args.title {
        update = update.title(title.clone());
    }
    if let Some(description) = &args.description {
        update = update.description(description.clone());
    }
    if let Some(priority) = &args.priority {
        update = update.priority(parse_priority(priority));
    }
    if args.clear_tags {
        update = update.tags(Vec::<String>::new());
    } else if !args.tags.is_empty() {
        update = update.tags(args.tags.clone());
    }
    update
}

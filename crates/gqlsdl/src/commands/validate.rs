use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use gqlsdl_core::ResolutionPolicy;
use gqlsdl_core::SchemaBuildError;
use gqlsdl_core::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub(crate) enum PolicyArg {
    #[default]
    Sequential,
    Concurrent,
}
impl From<PolicyArg> for ResolutionPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Sequential => ResolutionPolicy::Sequential,
            PolicyArg::Concurrent => ResolutionPolicy::Concurrent,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=PolicyArg::Sequential,
        help="How declarations are resolved: `sequential` requires every \
             referenced type to be declared earlier, `concurrent` accepts \
             any declaration order.",
        long,
        value_enum,
    )]
    pub(crate) policy: PolicyArg,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// Schema files discovered under the command's path arguments.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub(crate) file_paths: Vec<PathBuf>,
    pub(crate) num_skipped: usize,
}

impl ValidateCmd {
    /// Extensions normalized to a leading `.`-free form.
    fn normalized_exts(&self) -> HashSet<String> {
        self.graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }

    pub(crate) fn find_schema_files(&self) -> anyhow::Result<FoundFiles> {
        let exts = self.normalized_exts();
        let mut found = FoundFiles::default();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("failed to walk {}", path.display())
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                let matches_ext = entry_path.extension()
                    .is_some_and(|ext| exts.contains(ext.to_string_lossy().as_ref()));
                if matches_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    found.file_paths.push(entry_path.to_path_buf());
                } else {
                    found.num_skipped += 1;
                }
            }
        }

        // A lone file argument is validated whatever its extension.
        if found.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.file_paths.push(first_arg_path.clone());
            found.num_skipped = 0;
        }

        if found.file_paths.is_empty() {
            anyhow::bail!("no schema files found under the given paths");
        }
        log::debug!("Found {} schema files to be validated.", found.file_paths.len());
        Ok(found)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = match self.find_schema_files() {
            Ok(found) => found,
            Err(err) => return CommandResult::error(err),
        };

        let mut builder = SchemaBuilder::new().policy(self.policy.into());
        for path in &found.file_paths {
            let content = match std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
            {
                Ok(content) => content,
                Err(err) => return CommandResult::error(err),
            };
            builder = match builder.load_str(Some(path.as_path()), &content) {
                Ok(builder) => builder,
                Err(SchemaBuildError::ParseError { error, .. }) => {
                    return CommandResult::stderr(format_args!(
                        "{} {}",
                        output_utils::RED_X,
                        error.format_detailed(Some(&content)),
                    ));
                }
                Err(err) => return CommandResult::error(err.into()),
            };
        }

        match builder.build_async().await {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Schema validated successfully:\n",
                    "  * Analyzed {}.\n",
                    "  * Skipped {}.\n",
                    "  * Resolved {} ({} policy).\n",
                    "  * Query type: `{}`.\n",
                    "  * Mutation type: {}.\n",
                ),
                output_utils::GREEN_CHECK,
                output_utils::count_noun(found.file_paths.len(), "file", "files"),
                output_utils::count_noun(found.num_skipped, "non-schema file", "non-schema files"),
                output_utils::count_noun(
                    schema.defined_types().count(),
                    "type definition",
                    "type definitions",
                ),
                ResolutionPolicy::from(self.policy),
                schema.query_type().name(),
                schema.mutation_type()
                    .map_or_else(|| "none".to_string(), |t| format!("`{}`", t.name())),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {err}\n",
                output_utils::RED_X,
            )),
        }
    }
}

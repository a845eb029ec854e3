//! Compilation Driver
//!
//! Sequences one run through its stages:
//! 1. Resolve the source reference (`Start -> Resolved`)
//! 2. Copy the input into an `idli_` temp file (`-> RawCopied`)
//! 3. Run the preprocessor into an `idlf_` temp file, then delete the raw
//!    copy (`-> Preprocessed`)
//! 4. Feed the output to the parser (`-> Parsing -> Finished`)
//!
//! Any failure moves the driver to `Aborted`. Every temp file the driver
//! allocates is deleted before `compile` returns: explicitly on the success
//! path, where a failed deletion is an error, and by drop on abort paths.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::{ProcessOutcome, SourceNames};
use crate::domain::ports::{
    CompileEvent, CompileEventSink, IdlParser, NoopEventSink, Preprocessor,
};
use crate::domain::value_objects::{CompileStage, SourceReference};
use crate::error::{IdlcError, IdlcResult};
use crate::infrastructure::fs::{FileCopier, PathResolver, TempFileSource, TemporaryFile};
use crate::infrastructure::preprocessor::{locate_preprocessor, PreprocessorCommand};

use super::options::CompileOptions;
use super::result::{CompilationResult, CompileOutcome};

/// Prefix of the temp file holding the copied input
pub const RAW_INPUT_PREFIX: &str = "idli_";

/// Prefix of the temp file holding the preprocessor output
pub const PREPROCESSED_PREFIX: &str = "idlf_";

const RAW_INPUT_ROLE: &str = "cpp input";
const PREPROCESSED_ROLE: &str = "parser input";

/// Compile use case - owns the temp files of a run and drives it to the end
///
/// Parameterized by its collaborators (ports) so tests can substitute the
/// preprocessor and the parser. The temp file source is boxed for the same reason.
pub struct CompilationDriver<P, Q>
where
    P: Preprocessor,
    Q: IdlParser,
{
    options: CompileOptions,
    resolver: PathResolver,
    allocator: Box<dyn TempFileSource>,
    copier: FileCopier,
    preprocessor: P,
    parser: Q,
    events: Arc<dyn CompileEventSink>,
    stage: CompileStage,
}

impl<P, Q> CompilationDriver<P, Q>
where
    P: Preprocessor,
    Q: IdlParser,
{
    pub fn new(
        options: CompileOptions,
        resolver: PathResolver,
        allocator: impl TempFileSource + 'static,
        preprocessor: P,
        parser: Q,
    ) -> Self {
        Self {
            options,
            resolver,
            allocator: Box::new(allocator),
            copier: FileCopier::new(),
            preprocessor,
            parser,
            events: Arc::new(NoopEventSink),
            stage: CompileStage::Start,
        }
    }

    /// Report progress to `events`.
    pub fn with_events(mut self, events: Arc<dyn CompileEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// The stage the last run reached.
    pub fn stage(&self) -> CompileStage {
        self.stage
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    pub fn parser(&self) -> &Q {
        &self.parser
    }

    pub fn into_parser(self) -> Q {
        self.parser
    }

    /// Run the full pipeline for `source`.
    pub fn compile(&mut self, source: &SourceReference) -> CompilationResult {
        self.stage = CompileStage::Start;
        self.events.on_event(CompileEvent::Started {
            source: source.display_name(),
        });

        let result = self.run_pipeline(source);

        match &result {
            Ok(outcome) => self.events.on_event(CompileEvent::Completed {
                preprocessed_only: matches!(outcome, CompileOutcome::Preprocessed),
                error_count: outcome.error_count(),
            }),
            Err(e) => {
                self.enter(CompileStage::Aborted);
                self.events.on_event(CompileEvent::Failed {
                    message: e.to_string(),
                    exit_code: e.exit_code(),
                });
            }
        }

        result
    }

    fn run_pipeline(&mut self, source: &SourceReference) -> CompilationResult {
        let (copy_from, include_from) = self.resolve(source)?;
        self.enter(CompileStage::Resolved);

        let raw = self.allocator.allocate(RAW_INPUT_PREFIX)?;
        self.copier
            .copy(copy_from.as_deref(), raw.path())
            .map_err(|cause| IdlcError::Copy {
                source_name: source.describe(),
                destination: raw.path().to_path_buf(),
                cause,
            })?;
        self.enter(CompileStage::RawCopied);

        let output = self.allocator.allocate(PREPROCESSED_PREFIX)?;
        self.preprocess(source, include_from.as_deref(), &raw, &output)?;

        let names = SourceNames::new(source.display_name(), raw.path());
        remove_temp(raw, RAW_INPUT_ROLE)?;
        self.enter(CompileStage::Preprocessed);

        if self.options.preprocess_only {
            remove_temp(output, PREPROCESSED_ROLE)?;
            self.enter(CompileStage::Finished);
            return Ok(CompileOutcome::Preprocessed);
        }

        let file = File::open(output.path()).map_err(|cause| IdlcError::ParserOpen {
            path: output.path().to_path_buf(),
            cause,
        })?;
        self.enter(CompileStage::Parsing);

        let error_count = {
            let mut reader = BufReader::new(file);
            self.parser.parse(&mut reader, &names)
        };
        debug!("parser reported {error_count} error(s)");

        remove_temp(output, PREPROCESSED_ROLE)?;
        self.enter(CompileStage::Finished);
        Ok(CompileOutcome::Parsed { error_count })
    }

    /// Where to copy from, and which path the include directory is taken from.
    ///
    /// A plain path keeps the spelling the user gave for `-I<dir>`; a URL
    /// only has its resolved form.
    fn resolve(&self, source: &SourceReference) -> IdlcResult<(Option<PathBuf>, Option<PathBuf>)> {
        let Some(reference) = source.path() else {
            return Ok((None, None));
        };

        let location = self.resolver.resolve(reference)?;
        debug!("resolved {} to {}", reference.display(), location.url());

        let include_from = if source.is_file_url() {
            location.path().to_path_buf()
        } else {
            reference.to_path_buf()
        };
        Ok((Some(location.path().to_path_buf()), Some(include_from)))
    }

    fn preprocess(
        &self,
        source: &SourceReference,
        include_from: Option<&Path>,
        raw: &TemporaryFile,
        output: &TemporaryFile,
    ) -> IdlcResult<()> {
        let program = locate_preprocessor(self.options.preprocessor.as_deref())?;
        let invocation = PreprocessorCommand::new(self.options.flavor)
            .input(include_from)
            .defines(&self.options.defines)
            .include_paths(&self.options.include_paths)
            .build(&program, output.path(), raw.path());

        info!("{invocation}");
        self.events.on_event(CompileEvent::PreprocessorInvoked {
            command: invocation.to_string(),
        });

        match self.preprocessor.run(&invocation) {
            ProcessOutcome::Success => Ok(()),
            ProcessOutcome::LaunchFailure { message } => {
                Err(IdlcError::PreprocessorLaunch { program, message })
            }
            ProcessOutcome::NonZeroExit { code } => Err(IdlcError::PreprocessorExit {
                source_name: source.describe(),
                code,
            }),
        }
    }

    fn enter(&mut self, stage: CompileStage) {
        debug!("stage {} -> {}", self.stage, stage);
        self.stage = stage;
        self.events.on_event(CompileEvent::StageEntered { stage });
    }
}

fn remove_temp(file: TemporaryFile, role: &'static str) -> IdlcResult<()> {
    let path = file.path().to_path_buf();
    file.remove()
        .map_err(|cause| IdlcError::TempCleanup { role, path, cause })
}

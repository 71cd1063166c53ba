//! [`TemplateEngine`] implementation on top of `minijinja`.

use std::collections::HashMap;
use std::sync::Arc;

use minijinja::machinery::{self, CompiledTemplate, Instructions, TemplateConfig};
use minijinja::{AutoEscape, Environment};
use tracing::trace;

use crate::serialized::to_json;
use crate::{
	AstNode, BlockInstructions, EngineError, Instruction, ROOT_BLOCK, RenderEnvironment, Span, TemplateEngine, TemplateFiles, Token,
	Value,
};

/// File name reported in diagnostics for sources that are not registered templates.
const ANONYMOUS_SOURCE: &str = "<string>";

/// The MiniJinja template engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinja;

/// Environment holding owned copies of the registered sources.
pub struct MiniJinjaEnvironment {
	env: Environment<'static>,
}

impl TemplateEngine for MiniJinja {
	type Environment = MiniJinjaEnvironment;

	fn create_environment(&self, files: &TemplateFiles) -> Result<Self::Environment, EngineError> {
		let mut env = Environment::new();
		env.set_debug(true);
		for (name, source) in files {
			trace!(name = %name, bytes = source.len(), "registering template");
			env.add_template_owned(name.clone(), source.clone())?;
		}
		Ok(MiniJinjaEnvironment { env })
	}

	fn tokenize(&self, source: &str) -> Result<Vec<(Token, Span)>, EngineError> {
		trace!(bytes = source.len(), "tokenizing");
		machinery::tokenize(source, false, Default::default(), Default::default())
			.map(|item| {
				let (token, span) = item?;
				Ok((Token::from_serialized(to_json(&token)?)?, Span::from_serialized(to_json(&span)?)?))
			})
			.collect()
	}

	fn parse(&self, source: &str) -> Result<AstNode, EngineError> {
		trace!(bytes = source.len(), "parsing");
		let ast = machinery::parse(source, ANONYMOUS_SOURCE, Default::default(), Default::default())?;
		Ok(AstNode::from_serialized(to_json(&ast)?))
	}

	fn instructions(&self, source: &str) -> Result<BlockInstructions, EngineError> {
		trace!(bytes = source.len(), "compiling");
		let config = TemplateConfig {
			syntax_config: Default::default(),
			ws_config: Default::default(),
			default_auto_escape: Arc::new(|_| AutoEscape::None),
		};
		let compiled = CompiledTemplate::new(ANONYMOUS_SOURCE, source, &config)?;

		let mut blocks = HashMap::with_capacity(compiled.blocks.len() + 1);
		blocks.insert(ROOT_BLOCK.to_owned(), convert_program(&compiled.instructions)?);
		for (name, program) in compiled.blocks.iter() {
			blocks.insert(name.to_string(), convert_program(program)?);
		}
		Ok(blocks)
	}
}

impl RenderEnvironment for MiniJinjaEnvironment {
	fn render(&self, name: &str, context: &Value) -> Result<String, EngineError> {
		trace!(name, "rendering");
		let template = self.env.get_template(name)?;
		Ok(template.render(context)?)
	}
}

fn convert_program(program: &Instructions<'_>) -> Result<Vec<Instruction>, EngineError> {
	(0..program.len())
		.filter_map(|idx| program.get(idx))
		.map(|instr| Instruction::from_serialized(to_json(instr)?))
		.collect()
}

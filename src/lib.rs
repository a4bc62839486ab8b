use swc_core::{
    ecma::{
        ast::{Pass, Program, VarDecl},
        visit::{visit_mut_pass, VisitMut, VisitMutWith},
    },
    plugin::{plugin_transform, proxies::TransformPluginProgramMetadata},
};

pub mod config;
pub mod error;
pub mod matcher;
pub mod rewriter;


pub use config::{Config, HocNames, DEFAULT_HOCS};
pub use error::ConfigError;

use matcher::match_declarator;
use rewriter::rewrite;

// -----------------------------------------------------------------------------
// Transform state
// -----------------------------------------------------------------------------

/// Names the anonymous function passed to a recognized HOC after the
/// variable it is bound to: `const A = memo(() => ..)` becomes
/// `const A = memo(function A() { return ..; })`.
pub struct HocNameTransform {
    hocs: HocNames,
}

impl HocNameTransform {
    pub fn new(hocs: HocNames) -> Self {
        tracing::debug!(hocs = ?hocs.sorted(), "hoc name transform configured");
        Self { hocs }
    }
}

impl VisitMut for HocNameTransform {
    fn visit_mut_program(&mut self, n: &mut Program) {
        if self.hocs.is_empty() {
            tracing::debug!("no hocs configured, skipping");
            return;
        }
        n.visit_mut_children_with(self);
    }

    fn visit_mut_var_decl(&mut self, n: &mut VarDecl) {
        n.visit_mut_children_with(self);

        for decl in n.decls.iter_mut() {
            let replacement = match_declarator(decl, &self.hocs).map(|m| {
                tracing::trace!(name = %m.name.sym, "naming hoc argument");
                rewrite(&m)
            });
            if let Some(replacement) = replacement {
                *decl = replacement;
            }
        }
    }
}

/// The transform as a [`Pass`], for native hosts.
pub fn hoc_name(hocs: HocNames) -> impl Pass {
    visit_mut_pass(HocNameTransform::new(hocs))
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

#[plugin_transform]
pub fn process_transform(mut program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let config = metadata
        .get_transform_plugin_config()
        .map(|raw| {
            Config::from_json(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring plugin config, using default hocs");
                Config::default()
            })
        })
        .unwrap_or_default();

    let mut transform = HocNameTransform::new(config.into());
    program.visit_mut_with(&mut transform);

    program
}

//! # Collection Rules
//!
//! The rule sets of every entity in a Bruno collection export. This file is
//! the whole validation contract; the walker in [`registry`](crate::registry)
//! only evaluates it.
//!
//! | Entity | Field | Rules |
//! |--------|-------|-------|
//! | Collection | `version` | required, oneof=1 |
//! | Collection | `name` | required |
//! | Collection | `activeEnvironmentUid` | uid format when present |
//! | Environment | `name` / `variables` | required |
//! | EnvironmentVariable | `type` / `enabled` | required (+ oneof=text) |
//! | Item | `type` | required, oneof item types |
//! | Item | `seq` | min=1 when present |
//! | Item | `name` | required |
//! | Item | `request` | required if type is http-request or graphql-request |
//! | Request | `url` / `method` / `headers` | required (+ oneof methods) |
//! | RequestParam, MultipartFormEntry | `type` | required, oneof |
//! | Auth / Body | `mode` | required, oneof modes |
//! | OAuth2 | `grantType` | required, oneof grant types |
//!
//! Every `uid` is format-checked only when `check_uids` is configured, and
//! inactive Auth/Body variants are flagged only under `strict_variants`.

use std::sync::OnceLock;

use brunoc_core::{
    Auth, AuthMode, Body, BodyMode, Collection, Environment, EnvironmentVariable, GrantType,
    HttpMethod, Item, ItemType, KeyValue, MultipartFormEntry, MultipartType, OAuth2,
    ParamType, Request, RequestParam, RequestVars, Uid, Var, VariableType,
    COLLECTION_VERSION,
};
use tracing::debug;

use crate::registry::{Gate, Registry, RuleSet, Schema};
use crate::rule::{Observed, Rule};

pub(crate) struct RuleSets {
    collection: RuleSet<Collection>,
    environment: RuleSet<Environment>,
    variable: RuleSet<EnvironmentVariable>,
    item: RuleSet<Item>,
    request: RuleSet<Request>,
    key_value: RuleSet<KeyValue>,
    var: RuleSet<Var>,
    vars: RuleSet<RequestVars>,
    param: RuleSet<RequestParam>,
    auth: RuleSet<Auth>,
    oauth2: RuleSet<OAuth2>,
    body: RuleSet<Body>,
    multipart: RuleSet<MultipartFormEntry>,
}

macro_rules! schema {
    ($($ty:ty => $set:ident,)+) => {
        $(
            impl Schema for $ty {
                fn rule_set(registry: &Registry) -> &RuleSet<Self> {
                    &registry.sets.$set
                }
            }
        )+
    };
}

schema! {
    Collection => collection,
    Environment => environment,
    EnvironmentVariable => variable,
    Item => item,
    Request => request,
    KeyValue => key_value,
    Var => var,
    RequestVars => vars,
    RequestParam => param,
    Auth => auth,
    OAuth2 => oauth2,
    Body => body,
    MultipartFormEntry => multipart,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, built on first use and immutable afterwards.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let sets = RuleSets::build();
        debug!(rules = sets.rule_count(), "built collection rule registry");
        Registry { sets }
    })
}

const VERSIONS: &[&str] = &[COLLECTION_VERSION];

fn uid(value: &Option<Uid>) -> Observed<'_> {
    Observed::opt_text(value.as_ref().map(Uid::as_str))
}

fn only(mode: &'static [&'static str]) -> Rule {
    Rule::ExcludedUnless {
        sibling: "mode",
        values: mode,
    }
}

impl RuleSets {
    fn build() -> Self {
        Self {
            collection: collection_rules(),
            environment: environment_rules(),
            variable: variable_rules(),
            item: item_rules(),
            request: request_rules(),
            key_value: key_value_rules(),
            var: var_rules(),
            vars: RuleSet::<RequestVars>::new("RequestVars")
                .each("req", |v| v.req.as_deref())
                .each("res", |v| v.res.as_deref()),
            param: param_rules(),
            auth: auth_rules(),
            oauth2: RuleSet::<OAuth2>::new("OAuth2").field(
                "grantType",
                |o| Observed::text(&o.grant_type),
                &[Rule::Required, Rule::OneOf(GrantType::LITERALS)],
            ),
            body: body_rules(),
            multipart: multipart_rules(),
        }
    }

    fn rule_count(&self) -> usize {
        self.collection.rule_count()
            + self.environment.rule_count()
            + self.variable.rule_count()
            + self.item.rule_count()
            + self.request.rule_count()
            + self.key_value.rule_count()
            + self.var.rule_count()
            + self.vars.rule_count()
            + self.param.rule_count()
            + self.auth.rule_count()
            + self.oauth2.rule_count()
            + self.body.rule_count()
            + self.multipart.rule_count()
    }
}

fn collection_rules() -> RuleSet<Collection> {
    RuleSet::<Collection>::new("Collection")
        .field(
            "version",
            |c| Observed::text(&c.version),
            &[Rule::Required, Rule::OneOf(VERSIONS)],
        )
        .gated(Gate::CheckUids, "uid", |c| uid(&c.uid), &[Rule::UidFormat])
        .field("name", |c| Observed::text(&c.name), &[Rule::Required])
        .field(
            "activeEnvironmentUid",
            |c| uid(&c.active_environment_uid),
            &[Rule::UidFormat],
        )
        .each("items", |c| Some(c.items.as_slice()))
        .each("environments", |c| Some(c.environments.as_slice()))
}

fn environment_rules() -> RuleSet<Environment> {
    RuleSet::<Environment>::new("Environment")
        .gated(Gate::CheckUids, "uid", |e| uid(&e.uid), &[Rule::UidFormat])
        .field("name", |e| Observed::text(&e.name), &[Rule::Required])
        .field(
            "variables",
            |e| Observed::presence(e.variables.as_ref()),
            &[Rule::Required],
        )
        .each("variables", |e| e.variables.as_deref())
}

fn variable_rules() -> RuleSet<EnvironmentVariable> {
    RuleSet::<EnvironmentVariable>::new("EnvironmentVariable")
        .gated(Gate::CheckUids, "uid", |v| uid(&v.uid), &[Rule::UidFormat])
        .field(
            "type",
            |v| Observed::text(&v.kind),
            &[Rule::Required, Rule::OneOf(VariableType::LITERALS)],
        )
        .field("enabled", |v| Observed::opt_bool(v.enabled), &[Rule::Required])
}

fn item_rules() -> RuleSet<Item> {
    RuleSet::<Item>::new("Item")
        .gated(Gate::CheckUids, "uid", |i| uid(&i.uid), &[Rule::UidFormat])
        .field(
            "type",
            |i| Observed::text(&i.kind),
            &[Rule::Required, Rule::OneOf(ItemType::LITERALS)],
        )
        .field("seq", |i| Observed::opt_int(i.seq), &[Rule::Min(1)])
        .field("name", |i| Observed::text(&i.name), &[Rule::Required])
        .conditional(
            Gate::Always,
            "request",
            |i| Observed::presence(i.request.as_ref()),
            |i| i.kind.as_str(),
            Rule::RequiredIf {
                sibling: "type",
                values: ItemType::REQUIRES_REQUEST,
            },
        )
        .child("request", |i| i.request.as_ref())
        .each("items", |i| i.items.as_deref())
}

fn request_rules() -> RuleSet<Request> {
    RuleSet::<Request>::new("Request")
        .field("url", |r| Observed::text(&r.url), &[Rule::Required])
        .field(
            "method",
            |r| Observed::text(&r.method),
            &[Rule::Required, Rule::OneOf(HttpMethod::LITERALS)],
        )
        .field(
            "headers",
            |r| Observed::presence(r.headers.as_ref()),
            &[Rule::Required],
        )
        .each("headers", |r| r.headers.as_deref())
        .each("params", |r| r.params.as_deref())
        .child("auth", |r| Some(&r.auth))
        .child("body", |r| Some(&r.body))
        .child("vars", |r| r.vars.as_ref())
        .each("assertions", |r| r.assertions.as_deref())
}

fn key_value_rules() -> RuleSet<KeyValue> {
    RuleSet::<KeyValue>::new("KeyValue").gated(
        Gate::CheckUids,
        "uid",
        |kv| uid(&kv.uid),
        &[Rule::UidFormat],
    )
}

fn var_rules() -> RuleSet<Var> {
    RuleSet::<Var>::new("Var").gated(Gate::CheckUids, "uid", |v| uid(&v.uid), &[Rule::UidFormat])
}

fn param_rules() -> RuleSet<RequestParam> {
    RuleSet::<RequestParam>::new("RequestParam")
        .gated(Gate::CheckUids, "uid", |p| uid(&p.uid), &[Rule::UidFormat])
        .field(
            "type",
            |p| Observed::text(&p.kind),
            &[Rule::Required, Rule::OneOf(ParamType::LITERALS)],
        )
}

fn multipart_rules() -> RuleSet<MultipartFormEntry> {
    RuleSet::<MultipartFormEntry>::new("MultipartFormEntry")
        .gated(Gate::CheckUids, "uid", |m| uid(&m.uid), &[Rule::UidFormat])
        .field(
            "type",
            |m| Observed::text(&m.kind),
            &[Rule::Required, Rule::OneOf(MultipartType::LITERALS)],
        )
}

fn auth_rules() -> RuleSet<Auth> {
    RuleSet::<Auth>::new("Auth")
        .field(
            "mode",
            |a| Observed::text(&a.mode),
            &[Rule::Required, Rule::OneOf(AuthMode::LITERALS)],
        )
        .conditional(
            Gate::StrictVariants,
            "awsv4",
            |a| Observed::presence(a.awsv4.as_ref()),
            |a| a.mode.as_str(),
            only(&["awsv4"]),
        )
        .conditional(
            Gate::StrictVariants,
            "basic",
            |a| Observed::presence(a.basic.as_ref()),
            |a| a.mode.as_str(),
            only(&["basic"]),
        )
        .conditional(
            Gate::StrictVariants,
            "bearer",
            |a| Observed::presence(a.bearer.as_ref()),
            |a| a.mode.as_str(),
            only(&["bearer"]),
        )
        .conditional(
            Gate::StrictVariants,
            "digest",
            |a| Observed::presence(a.digest.as_ref()),
            |a| a.mode.as_str(),
            only(&["digest"]),
        )
        .conditional(
            Gate::StrictVariants,
            "oauth2",
            |a| Observed::presence(a.oauth2.as_ref()),
            |a| a.mode.as_str(),
            only(&["oauth2"]),
        )
        .child("oauth2", |a| a.oauth2.as_ref())
}

fn body_rules() -> RuleSet<Body> {
    RuleSet::<Body>::new("Body")
        .field(
            "mode",
            |b| Observed::text(&b.mode),
            &[Rule::Required, Rule::OneOf(BodyMode::LITERALS)],
        )
        .conditional(
            Gate::StrictVariants,
            "json",
            |b| Observed::presence(b.json.as_ref()),
            |b| b.mode.as_str(),
            only(&["json"]),
        )
        .conditional(
            Gate::StrictVariants,
            "text",
            |b| Observed::presence(b.text.as_ref()),
            |b| b.mode.as_str(),
            only(&["text"]),
        )
        .conditional(
            Gate::StrictVariants,
            "xml",
            |b| Observed::presence(b.xml.as_ref()),
            |b| b.mode.as_str(),
            only(&["xml"]),
        )
        .conditional(
            Gate::StrictVariants,
            "sparql",
            |b| Observed::presence(b.sparql.as_ref()),
            |b| b.mode.as_str(),
            only(&["sparql"]),
        )
        .conditional(
            Gate::StrictVariants,
            "formUrlEncoded",
            |b| Observed::presence(b.form_url_encoded.as_ref()),
            |b| b.mode.as_str(),
            only(&["formUrlEncoded"]),
        )
        .conditional(
            Gate::StrictVariants,
            "multipartForm",
            |b| Observed::presence(b.multipart_form.as_ref()),
            |b| b.mode.as_str(),
            only(&["multipartForm"]),
        )
        .conditional(
            Gate::StrictVariants,
            "graphql",
            |b| Observed::presence(b.graphql.as_ref()),
            |b| b.mode.as_str(),
            only(&["graphql"]),
        )
        .each("formUrlEncoded", |b| b.form_url_encoded.as_deref())
        .each("multipartForm", |b| b.multipart_form.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_built_once() {
        let a = registry() as *const Registry;
        let b = registry() as *const Registry;
        assert_eq!(a, b);
    }

    #[test]
    fn every_entity_has_rules_or_children() {
        let sets = &registry().sets;
        assert_eq!(sets.collection.entity(), "Collection");
        assert!(sets.collection.rule_count() >= 4);
        assert!(sets.item.rule_count() >= 5);
        assert!(sets.request.rule_count() >= 4);
        assert_eq!(sets.oauth2.rule_count(), 2);
        assert_eq!(sets.environment.rule_count(), 3);
        assert_eq!(sets.vars.rule_count(), 0);
    }

    #[test]
    fn strict_variant_rules_cover_every_payload() {
        let sets = &registry().sets;
        // mode (2 rules) + 5 auth variants
        assert_eq!(sets.auth.rule_count(), 2 + 5);
        // mode (2 rules) + 7 body payloads
        assert_eq!(sets.body.rule_count(), 2 + 7);
    }
}

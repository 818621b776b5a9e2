//! Asynchronous GPU query objects: timing, primitive counts, and occlusion,
//! plus the conditional-render helper built on occlusion results.

use crate::context::LiveObject;
use crate::error::{Error, Result};
use crate::raw;
use crate::types::{QueryKind, QueryName};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

struct Inner {
    /// One GL query name per kind this `Query` was asked to track.
    names: HashMap<QueryKind, QueryName>,
    active: Cell<Option<QueryKind>>,
    released: Cell<bool>,
    /// Cached results fetched by `end`, since `GetQueryObject` blocks and a
    /// caller may want the value read back more than once.
    results: std::cell::RefCell<HashMap<QueryKind, u64>>,
}

impl LiveObject for Inner {
    fn glo_raw(&self) -> u32 {
        if self.released.get() {
            return 0;
        }
        // A Query owns up to four GL names; report whichever is non-zero
        // first, since the live list only needs "is this object still alive".
        self.names.values().find(|n| !n.is_none()).map(|n| n.0).unwrap_or(0)
    }

    fn kind_name(&self) -> &'static str {
        "Query"
    }
}

/// Tracks any combination of [`QueryKind`]s. The common construction covers
/// elapsed time, primitives generated, and samples passed in one object.
#[derive(Clone)]
pub struct Query(Rc<Inner>);

impl Query {
    pub fn create(context: &crate::context::Context, kinds: &[QueryKind]) -> Result<Query> {
        if kinds.is_empty() {
            return Err(Error::invalid_argument("a query needs at least one kind"));
        }
        let names = raw::gen_queries(kinds.len());
        if names.iter().any(|n| n.is_none()) {
            return Err(Error::object_creation_failed("Queries"));
        }
        let map: HashMap<QueryKind, QueryName> = kinds.iter().copied().zip(names).collect();

        let inner = Rc::new(Inner {
            names: map,
            active: Cell::new(None),
            released: Cell::new(false),
            results: std::cell::RefCell::new(HashMap::new()),
        });
        context.register(Rc::downgrade(&inner) as Weak<dyn LiveObject>);
        Ok(Query(inner))
    }

    /// Default construction: time elapsed, primitives generated, samples
    /// passed, the trio the high-level rendering loop typically wants.
    pub fn create_default(context: &crate::context::Context) -> Result<Query> {
        Query::create(context, &[QueryKind::TimeElapsed, QueryKind::PrimitivesGenerated, QueryKind::SamplesPassed])
    }

    /// Begins sampling `kind`. Only one kind may be active on a `Query` at a
    /// time; a nested `begin` is rejected.
    pub fn begin(&self, kind: QueryKind) -> Result<()> {
        if self.0.active.get().is_some() {
            return Err(Error::unsupported("query already has an active kind; end it first"));
        }
        let name = *self
            .0
            .names
            .get(&kind)
            .ok_or_else(|| Error::invalid_argument("this query was not created with that kind"))?;
        raw::begin_query(gl::types::GLenum::from(kind), name);
        self.0.active.set(Some(kind));
        Ok(())
    }

    pub fn end(&self) -> Result<()> {
        let kind = self
            .0
            .active
            .take()
            .ok_or_else(|| Error::unsupported("no active query to end"))?;
        raw::end_query(gl::types::GLenum::from(kind));
        let name = self.0.names[&kind];
        let result = raw::get_query_result(name);
        self.0.results.borrow_mut().insert(kind, result);
        Ok(())
    }

    pub fn elapsed_time(&self) -> Option<u64> {
        self.0.results.borrow().get(&QueryKind::TimeElapsed).copied()
    }

    pub fn primitives_generated(&self) -> Option<u64> {
        self.0.results.borrow().get(&QueryKind::PrimitivesGenerated).copied()
    }

    pub fn samples(&self) -> Option<u64> {
        self.0.results.borrow().get(&QueryKind::SamplesPassed).copied()
    }

    /// Conditionally renders based on this query's occlusion result.
    /// Prefers `ANY_SAMPLES_PASSED` over `SAMPLES_PASSED` when both were
    /// requested at construction; errors if neither is present.
    pub fn render_conditionally(&self, mode: gl::types::GLenum) -> Result<ConditionalRender<'_>> {
        let kind = if self.0.names.contains_key(&QueryKind::AnySamplesPassed) {
            QueryKind::AnySamplesPassed
        } else if self.0.names.contains_key(&QueryKind::SamplesPassed) {
            QueryKind::SamplesPassed
        } else {
            return Err(Error::unsupported("conditional render requires an occlusion query kind"));
        };
        let name = self.0.names[&kind];
        raw::begin_conditional_render(name, mode);
        Ok(ConditionalRender { _query: self })
    }

    pub fn release(&self) {
        if self.0.released.get() {
            return;
        }
        let names: Vec<QueryName> = self.0.names.values().copied().filter(|n| !n.is_none()).collect();
        if !names.is_empty() {
            raw::delete_queries(&names);
        }
        self.0.released.set(true);
    }
}

/// RAII guard for a `BeginConditionalRender`/`EndConditionalRender` pair.
pub struct ConditionalRender<'a> {
    _query: &'a Query,
}

impl Drop for ConditionalRender<'_> {
    fn drop(&mut self) {
        raw::end_conditional_render();
    }
}

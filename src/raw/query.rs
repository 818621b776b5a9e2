//! # Query Objects and Conditional Rendering
//! <https://www.khronos.org/opengl/wiki/Category:Core_API_Ref_Query_Objects>

use crate::types::QueryName;
use gl::types::*;

pub fn gen_queries(n: usize) -> Vec<QueryName> {
    let mut names = vec![0 as GLuint; n];
    unsafe { gl::GenQueries(n as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(QueryName).collect()
}

pub fn delete_queries(names: &[QueryName]) {
    let raw: Vec<GLuint> = names.iter().map(|q| q.0).collect();
    unsafe { gl::DeleteQueries(raw.len() as GLsizei, raw.as_ptr()) };
}

pub fn begin_query(target: GLenum, query: QueryName) {
    unsafe { gl::BeginQuery(target, query.0) }
}

pub fn end_query(target: GLenum) {
    unsafe { gl::EndQuery(target) }
}

/// `GL_QUERY_RESULT` of the query, blocking until the result is available.
pub fn get_query_result(query: QueryName) -> u64 {
    let mut result: GLuint64 = 0;
    unsafe { gl::GetQueryObjectui64v(query.0, gl::QUERY_RESULT, &mut result) };
    result
}

pub fn begin_conditional_render(query: QueryName, mode: GLenum) {
    unsafe { gl::BeginConditionalRender(query.0, mode) }
}

pub fn end_conditional_render() {
    unsafe { gl::EndConditionalRender() }
}

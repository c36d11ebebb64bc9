use std::ffi::CStr;
use libc::c_char;

use crate::algorithm::Sap;
use crate::boundary;
use crate::graph::{Digraph, Graph};
use crate::Result;

/// Status returned alongside a query result
pub const SAP_OK: i32 = 0;
pub const SAP_INVALID_VERTEX: i32 = 1;
pub const SAP_INVALID_ARGUMENT: i32 = 2;

#[repr(C)]
pub struct FfiSap {
    sap: Sap,
}

/// Builds a query engine from NUL-terminated edge-list text.
/// Returns null if the text is not a valid edge list.
#[no_mangle]
pub extern "C" fn sap_new_from_edge_list(text: *const c_char) -> *mut FfiSap {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let text = unsafe { CStr::from_ptr(text) };
    let graph = match text.to_str().ok().map(str::parse::<Digraph>) {
        Some(Ok(graph)) => graph,
        _ => return std::ptr::null_mut(),
    };
    Box::into_raw(Box::new(FfiSap {
        sap: Sap::from_digraph(graph),
    }))
}

#[no_mangle]
pub extern "C" fn sap_vertex_count(s: *const FfiSap) -> usize {
    unsafe { &*s }.sap.graph().vertex_count()
}

#[no_mangle]
pub extern "C" fn sap_free(s: *mut FfiSap) {
    if !s.is_null() {
        unsafe {
            drop(Box::from_raw(s));
        }
    }
}

/// Length of the shortest ancestral path between `v` and `w`, -1 if none.
/// `status` receives `SAP_OK` or `SAP_INVALID_VERTEX`.
#[no_mangle]
pub extern "C" fn sap_length(s: *const FfiSap, v: i64, w: i64, status: *mut i32) -> i64 {
    let sap = &unsafe { &*s }.sap;
    report(pair(sap, v, w).map(|p| p.map(|p| p.length)), status)
}

/// Common ancestor on a shortest ancestral path between `v` and `w`, -1 if none
#[no_mangle]
pub extern "C" fn sap_ancestor(s: *const FfiSap, v: i64, w: i64, status: *mut i32) -> i64 {
    let sap = &unsafe { &*s }.sap;
    report(pair(sap, v, w).map(|p| p.map(|p| p.ancestor)), status)
}

/// Set form of `sap_length` over two arrays of vertex IDs
#[no_mangle]
pub extern "C" fn sap_length_sets(
    s: *const FfiSap,
    v: *const i64,
    v_len: usize,
    w: *const i64,
    w_len: usize,
    status: *mut i32,
) -> i64 {
    let sap = &unsafe { &*s }.sap;
    let result = sets(sap, v, v_len, w, w_len).map(|p| p.map(|p| p.length));
    report(result, status)
}

/// Set form of `sap_ancestor` over two arrays of vertex IDs
#[no_mangle]
pub extern "C" fn sap_ancestor_sets(
    s: *const FfiSap,
    v: *const i64,
    v_len: usize,
    w: *const i64,
    w_len: usize,
    status: *mut i32,
) -> i64 {
    let sap = &unsafe { &*s }.sap;
    let result = sets(sap, v, v_len, w, w_len).map(|p| p.map(|p| p.ancestor));
    report(result, status)
}

fn pair(sap: &Sap, v: i64, w: i64) -> Result<Option<crate::AncestralPath>> {
    let n = sap.graph().vertex_count();
    let v = boundary::vertex(v, n)?;
    let w = boundary::vertex(w, n)?;
    sap.query(v, w)
}

fn sets(
    sap: &Sap,
    v: *const i64,
    v_len: usize,
    w: *const i64,
    w_len: usize,
) -> Result<Option<crate::AncestralPath>> {
    let n = sap.graph().vertex_count();
    let v = boundary::vertex_set(as_ids(v, v_len), n)?;
    let w = boundary::vertex_set(as_ids(w, w_len), n)?;
    sap.query_sets(v, w)
}

// A null array reads as a single missing member so it is rejected like a null element
fn as_ids(ptr: *const i64, len: usize) -> Vec<Option<i64>> {
    if ptr.is_null() {
        return vec![None];
    }
    unsafe { std::slice::from_raw_parts(ptr, len) }
        .iter()
        .map(|&id| Some(id))
        .collect()
}

fn report(result: Result<Option<usize>>, status: *mut i32) -> i64 {
    let (code, value) = match result {
        Ok(found) => (SAP_OK, boundary::to_sentinel(found)),
        Err(crate::Error::InvalidVertex { .. }) => (SAP_INVALID_VERTEX, boundary::NOT_FOUND),
        Err(_) => (SAP_INVALID_ARGUMENT, boundary::NOT_FOUND),
    };
    if !status.is_null() {
        unsafe {
            *status = code;
        }
    }
    value
}

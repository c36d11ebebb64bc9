use crate::algorithm::Sap;
use crate::boundary;
use crate::graph::{Digraph, Graph, MutableGraph};
use crate::Error;
use pyo3::prelude::*;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::InvalidVertex { .. } => pyo3::exceptions::PyIndexError::new_err(err.to_string()),
        _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
    }
}

#[pyclass]
pub struct PyDigraph {
    graph: Digraph,
}

#[pymethods]
impl PyDigraph {
    #[new]
    fn new(vertices: usize) -> Self {
        PyDigraph {
            graph: Digraph::with_capacity(vertices),
        }
    }

    #[staticmethod]
    fn from_edge_list(text: &str) -> PyResult<Self> {
        let graph = text.parse().map_err(to_py_err)?;
        Ok(PyDigraph { graph })
    }

    fn add_vertex(&mut self) -> usize {
        self.graph.add_vertex()
    }

    fn add_edge(&mut self, from: usize, to: usize) -> bool {
        self.graph.add_edge(from, to)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

#[pyclass]
pub struct PySap {
    inner: Sap,
}

#[pymethods]
impl PySap {
    #[new]
    fn new(graph: &PyDigraph) -> Self {
        PySap {
            inner: Sap::new(&graph.graph),
        }
    }

    fn length(&self, v: i64, w: i64) -> PyResult<i64> {
        let (v, w) = self.pair(v, w)?;
        let found = self.inner.length(v, w).map_err(to_py_err)?;
        Ok(boundary::to_sentinel(found))
    }

    fn ancestor(&self, v: i64, w: i64) -> PyResult<i64> {
        let (v, w) = self.pair(v, w)?;
        let found = self.inner.ancestor(v, w).map_err(to_py_err)?;
        Ok(boundary::to_sentinel(found))
    }

    fn length_sets(&self, v: Vec<Option<i64>>, w: Vec<Option<i64>>) -> PyResult<i64> {
        let (v, w) = self.sets(v, w)?;
        let found = self.inner.length_sets(v, w).map_err(to_py_err)?;
        Ok(boundary::to_sentinel(found))
    }

    fn ancestor_sets(&self, v: Vec<Option<i64>>, w: Vec<Option<i64>>) -> PyResult<i64> {
        let (v, w) = self.sets(v, w)?;
        let found = self.inner.ancestor_sets(v, w).map_err(to_py_err)?;
        Ok(boundary::to_sentinel(found))
    }
}

impl PySap {
    fn pair(&self, v: i64, w: i64) -> PyResult<(usize, usize)> {
        let n = self.inner.graph().vertex_count();
        let v = boundary::vertex(v, n).map_err(to_py_err)?;
        let w = boundary::vertex(w, n).map_err(to_py_err)?;
        Ok((v, w))
    }

    fn sets(&self, v: Vec<Option<i64>>, w: Vec<Option<i64>>) -> PyResult<(Vec<usize>, Vec<usize>)> {
        let n = self.inner.graph().vertex_count();
        let v = boundary::vertex_set(v, n).map_err(to_py_err)?;
        let w = boundary::vertex_set(w, n).map_err(to_py_err)?;
        Ok((v, w))
    }
}

#[pymodule]
fn sap_graph_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyDigraph>()?;
    m.add_class::<PySap>()?;
    Ok(())
}

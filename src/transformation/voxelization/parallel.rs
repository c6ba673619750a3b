/// Calls `f` on every element of `data` together with its index, in parallel when the
/// `parallel` feature is enabled.
pub(super) fn for_each_indexed<T, F>(data: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
        data.par_iter_mut()
            .enumerate()
            .for_each(|(id, elt)| f(id, elt));
    }

    #[cfg(not(feature = "parallel"))]
    {
        data.iter_mut()
            .enumerate()
            .for_each(|(id, elt)| f(id, elt));
    }
}

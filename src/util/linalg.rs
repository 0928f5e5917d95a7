use crate::RealScalar;

/// Full discrete convolution, the output has length `input.len() + kernel.len() - 1`.
pub(crate) fn convolve_1d<T: RealScalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    if input_len == 0 || kernel_len == 0 {
        return vec![];
    }
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];
    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j] + *a * *b;
        }
    }
    output
}

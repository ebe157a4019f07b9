use regular_kadane::dynamic::max_subarray_sum;

fn main() {
    env_logger::init();

    let arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let subarray_sum = max_subarray_sum(&arr);
    println!("Max subarray sum {}", subarray_sum);
}

#[derive(Copy, Clone)]
pub struct ImageRange {
    pub from: u32,
    pub to: u32,
}

pub fn create_image_ranges(num_threads: u32, height: u32) -> Vec<ImageRange> {
    let height_per_thread = height / num_threads;
    let mut ranges = Vec::with_capacity(num_threads as usize);
    for t in 0..num_threads {
        let from = t * height_per_thread;
        let to = if t + 1 == num_threads {
            height
        } else {
            (t + 1) * height_per_thread
        };
        ranges.push(ImageRange { from, to });
    }
    ranges
}

pub fn render_progress_bar(width: u32, height: u32) -> indicatif::ProgressBar {
    let progress_bar = indicatif::ProgressBar::new(width as u64 * height as u64);
    progress_bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} (eta: {eta})")
            .progress_chars("#>-"),
    );
    progress_bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_all_rows_without_overlap() {
        for (threads, height) in [(1, 7), (4, 100), (3, 10), (8, 8)] {
            let ranges = create_image_ranges(threads, height);
            assert_eq!(ranges.len(), threads as usize);
            assert_eq!(ranges[0].from, 0);
            assert_eq!(ranges.last().unwrap().to, height);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].to, pair[1].from);
            }
        }
    }
}

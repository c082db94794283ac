use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{random_field, FieldLayout, Insets, Rect, SimpleRng, TicTacToeField};
use tui_tictactoe::engine::FieldController;
use tui_tictactoe::term::{FieldView, FrameBuffer, Viewport};
use tui_tictactoe::types::Cell;

fn bench_set_with_observer(c: &mut Criterion) {
    let mut field = TicTacToeField::new(11, 11).unwrap();
    field.subscribe(|cell| {
        black_box(cell);
    });

    c.bench_function("set_toggle_11x11", |b| {
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            let value = if toggle { Cell::PlayerOne } else { Cell::PlayerTwo };
            field.set(black_box(5), black_box(5), value);
        })
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let layout = FieldLayout::compute(
        Rect::from_size(1080.0, 1920.0),
        Insets::uniform(16.0),
        11,
        11,
        0.2,
    );

    c.bench_function("hit_test", |b| {
        b.iter(|| layout.hit_test(black_box(512.3), black_box(901.7)))
    });
}

fn bench_random_field(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("random_field", |b| b.iter(|| random_field(&mut rng).unwrap()));
}

fn bench_render(c: &mut Criterion) {
    let view = FieldView::default();
    let viewport = Viewport::new(160, 48);
    let field = random_field(&mut SimpleRng::new(9)).unwrap();
    let mut controller = FieldController::new(1).with_field(field);
    controller.resize(view.bounds(viewport));
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_160x48", |b| {
        b.iter(|| view.render_into(black_box(&controller), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_set_with_observer,
    bench_hit_test,
    bench_random_field,
    bench_render
);
criterion_main!(benches);

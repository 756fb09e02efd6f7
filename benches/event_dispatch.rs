use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use window_kit::{
    ClientSize, DispatchTarget, EventRegistry, HeadlessHost, Image, Message, Outcome, Pixel, Position, Priority,
    WindowConfig, WindowController, dispatch, ids,
};

const MESSAGE: u32 = ids::USER + 1;

#[derive(Default)]
struct Counter {
    events: EventRegistry<Counter>,
    hits: u64,
}

impl DispatchTarget for Counter {
    fn events(&self) -> &EventRegistry<Self> {
        &self.events
    }

    fn default_message(&mut self, _message: &Message) -> Outcome {
        Outcome::Ignored
    }
}

fn bump(counter: &mut Counter, _: &Message) -> Outcome {
    counter.hits += 1;
    Outcome::Handled
}

fn benchmark_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("mixed_priorities", |b| {
        b.iter(|| {
            let mut registry = EventRegistry::<Counter>::new();
            for i in 0..1000_i16 {
                registry.register(MESSAGE, Priority(black_box(i % 5 - 2)), bump);
            }
            registry
        });
    });

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for handlers in [1_usize, 8, 64] {
        let mut counter = Counter::default();
        for i in 0..handlers {
            counter.events.register(MESSAGE, Priority((i % 5) as i16 - 2), bump);
        }
        let message = Message::new(MESSAGE);

        group.throughput(Throughput::Elements(handlers as u64));
        group.bench_with_input(BenchmarkId::from_parameter(handlers), &message, |b, message| {
            b.iter(|| dispatch(&mut counter, black_box(message)));
        });
    }

    group.bench_function("default_procedure", |b| {
        let mut counter = Counter::default();
        let message = Message::new(MESSAGE);
        b.iter(|| dispatch(&mut counter, black_box(&message)));
    });

    group.finish();
}

fn benchmark_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint");

    let config = WindowConfig::default().with_size(640, 480);
    let mut controller = WindowController::new(HeadlessHost::new(), config).expect("default config is valid");
    controller.initialize().expect("headless host initializes");
    for z_index in 0..16 {
        let image = Image::solid(
            Position::new(z_index as f32 * 20.0, z_index as f32 * 10.0),
            ClientSize::new(128, 128),
            Pixel::rgba(0x40, 0x80, 0xC0, 0xC0),
        )
        .expect("image is not empty");
        controller.add_component(Box::new(image), z_index);
    }
    let frame_update = Message::new(ids::FRAME_UPDATE);

    group.throughput(Throughput::Elements(1));
    group.bench_function("16_images_640x480", |b| {
        b.iter(|| controller.dispatch(black_box(&frame_update)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_register, benchmark_dispatch, benchmark_paint);
criterion_main!(benches);
